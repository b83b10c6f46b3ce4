//! Trademark result card component.

use common::{search_state::ViewType, trademark_card::TrademarkCard};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdHistory};

#[component]
pub fn TrademarkResultCard(card: ReadSignal<TrademarkCard>, view_type: ReadSignal<ViewType>) -> Element {
    let TrademarkCard {
        mark,
        company,
        owners,
        number,
        date,
        status,
        status_date,
        renewal_date,
        class_name,
        class_codes,
        class_icon,
        history_date,
    } = card.read().clone();
    let status_class = card.read().status_css_class();
    let class_description = class_name.join(", ");
    let direction = match view_type() {
        ViewType::List => "row",
        ViewType::Grid => "column",
    };

    rsx! {
        div {
            class: "trademark-card {status_class}",
            style: "
                display: flex;
                flex-direction: {direction};
                align-items: stretch;
                gap: 16px;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                box-sizing: border-box;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.08);
            ",
            // MARK + OWNER
            div {
                style: "display: flex; flex-direction: column; gap: 4px; flex: 2; min-width: 0;",
                div {
                    style: "font-size: 20px; line-height: 28px; font-weight: 600; color: rgb(0, 0, 0); overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{mark}"
                }
                div {
                    style: "font-size: 15px; color: rgba(0, 0, 0, 0.7);",
                    title: "{owners}",
                    "{company}"
                }
                div {
                    style: "font-size: 14px; color: rgba(0, 0, 0, 0.5);",
                    "{number}"
                }
                div {
                    style: "font-size: 14px; color: rgba(0, 0, 0, 0.5);",
                    "{date}"
                }
            }
            // STATUS
            div {
                style: "display: flex; flex-direction: column; gap: 4px; flex: 1; min-width: 0;",
                span { class: "status-label", "{status}" }
                span {
                    style: "font-size: 14px; color: rgba(0, 0, 0, 0.6);",
                    "on {status_date}"
                }
                if let Some(history_date) = history_date {
                    span {
                        style: "display: flex; align-items: center; gap: 4px; font-size: 13px; color: rgba(0, 0, 0, 0.5);",
                        Icon { icon: MdHistory, style: "width: 14px; height: 14px;" }
                        "{history_date}"
                    }
                }
                span {
                    style: "font-size: 14px; color: rgba(0, 0, 0, 0.6);",
                    "Renewal: {renewal_date}"
                }
            }
            // CLASS DESCRIPTION
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    flex: 3;
                    min-width: 0;
                    font-size: 14px;
                    line-height: 20px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                ",
                div {
                    style: "
                        overflow: hidden;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                    ",
                    "{class_description}"
                }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px; align-items: center;",
                    if let Some(class_icon) = class_icon {
                        img { src: "{class_icon}", alt: "", style: "width: 18px; height: 18px;" }
                    }
                    for code in class_codes {
                        span {
                            key: "{code}",
                            class: "class-code",
                            "Class {code}"
                        }
                    }
                }
            }
        }
    }
}
