use dioxus::prelude::*;

/// Static call-to-action shown in the sidebar under the filters.
#[component]
pub fn ApplyForTrademark() -> Element {
    rsx! {
        div {
            id: "x-card-apply-for-trademark",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                border-radius: 16px;
                padding: 18px;
                background: linear-gradient(135deg, #F97316 0%, #FB923C 100%);
                color: white;
                box-shadow: 0 6px 16px rgba(0,0,0,0.08);
            ",
            div { style: "font-size: 20px; font-weight: 600;", "Protect your brand" }
            div {
                style: "font-size: 15px; line-height: 1.5; color: rgba(255,255,255,0.95);",
                "Didn't find a conflicting mark? File your own trademark application before someone else does."
            }
            div {
                style: "display:flex; flex-direction:row;",
                button {
                    style: "
                        height: 34px;
                        padding: 0 12px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        border: 1px solid #D1D5DB;
                        cursor: pointer;
                    ",
                    "Apply for Trademark",
                }
            }
        }
    }
}
