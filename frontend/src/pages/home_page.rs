use dioxus::prelude::*;

use crate::components::search_components::search_input_box::SearchInputBox;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Title { "Trademark Search - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}
            SearchCard {}
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Search" }
            span { style: "color:#F97316;", "US trademarks" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Look up marks, owners and registration numbers, then narrow the results by owner, law firm, attorney, class and status."
        }
    }
}

#[component]
fn SearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 620px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #1C212D 0%, #3B4252 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Type a search term in the text box below and hit Enter to start."
            }
            SearchInputBox { initial_term: String::new(), compact: false }
        }
    }
}
