//! Result card list, laid out as a list or a grid.

use common::{search_state::ViewType, trademark_card::TrademarkCard};
use dioxus::prelude::*;

use crate::{
    components::{error_boundary::ComponentErrorDisplay, loading_indicator::LoadingIndicator, search_components::trademark_result_card::TrademarkResultCard},
    pages::search_page::SearchPageContext,
};

#[component]
pub fn SearchResultList() -> Element {
    let state = use_context::<SearchPageContext>().state;
    let cards = use_memo(move || state.read().results.iter().map(TrademarkCard::from_record).collect::<Vec<_>>());
    let view_type = use_memo(move || state.read().view_type);
    let loading = use_memo(move || state.read().loading);
    let error = use_memo(move || state.read().error.clone());

    let list_style = match view_type() {
        ViewType::List => "display: flex; flex-direction: column; gap: 12px;",
        ViewType::Grid => "display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 12px;",
    };

    rsx! {
        if loading() {
            LoadingIndicator {}
        }
        if let Some(error_txt) = error() {
            ComponentErrorDisplay { error_txt }
        }
        ul {
            id: "x-search-results-wrapper",
            class: "trademark-list {view_type().css_class()}",
            style: "
                {list_style}
                list-style: none;
                padding: 0px;
                margin: 0px;
                width: 100%;
            ",
            for (index, card) in cards().into_iter().enumerate() {
                li {
                    key: "{index}-{card.number}-{card.mark}",
                    TrademarkResultCard { card: card.clone(), view_type: view_type() }
                }
            }
        }
    }
}
