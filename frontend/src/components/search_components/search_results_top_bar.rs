//! Hit count headline and the filters toggle.

use common::search_query::SortOrder;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdSearch, MdSwapVert}};

use crate::pages::search_page::SearchPageContext;

#[component]
pub fn SearchResultsTopBar() -> Element {
    let ctx = use_context::<SearchPageContext>();
    let state = ctx.state;
    let show_filters = use_memo(move || state.read().show_filters);
    let filters_border = use_memo(move || if show_filters() { "2px solid #F97316" } else { "1px solid rgba(0,0,0,0.3)" });

    rsx! {
        div {
            id: "x-search-results-top-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 12px 16px;
                border-bottom: 1px solid rgb(164, 164, 164);
                background-color: #F8FCFF;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 0;",
                HitCountHeadline {}
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            SortOrderButton {}
            button {
                class: "filters-button",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    cursor: pointer;
                    background: white;
                    border: {filters_border};
                    border-radius: 8px;
                    padding: 6px 12px;
                    font-size: 16px;
                ",
                onclick: move |_| ctx.toggle_filters.call(()),
                Icon { icon: MdSearch, style: "width: 18px; height: 18px;" }
                "Filters"
            }
        }
    }
}

#[component]
fn HitCountHeadline() -> Element {
    let state = use_context::<SearchPageContext>().state;
    let state = state.read();
    rsx! {
        "About {state.total_hits} Trademarks found for \"{state.query.term}\""
    }
}

#[component]
fn SortOrderButton() -> Element {
    let ctx = use_context::<SearchPageContext>();
    let state = ctx.state;
    let sort_order = use_memo(move || state.read().query.sort_order);
    let label = use_memo(move || match sort_order() {
        SortOrder::Desc => "Newest first",
        SortOrder::Asc => "Oldest first",
    });
    rsx! {
        button {
            title: "Change sort order",
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                cursor: pointer;
                background: white;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 8px;
                padding: 6px 12px;
                font-size: 16px;
            ",
            onclick: move |_| {
                let next = match sort_order() {
                    SortOrder::Desc => SortOrder::Asc,
                    SortOrder::Asc => SortOrder::Desc,
                };
                ctx.set_sort_order.call(next);
            },
            Icon { icon: MdSwapVert, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}
