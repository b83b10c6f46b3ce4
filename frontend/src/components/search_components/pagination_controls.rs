//! First / previous / page numbers / next / last.

use common::pagination::{PageNav, PageWindowItem};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight, MdFirstPage, MdLastPage}};

use crate::pages::search_page::SearchPageContext;

#[component]
pub fn PaginationControls() -> Element {
    let ctx = use_context::<SearchPageContext>();
    let state = ctx.state;
    let navigate = ctx.navigate;
    let window = use_memo(move || state.read().page_window());
    let first_disabled = use_memo(move || state.read().nav_disabled(PageNav::First));
    let last_disabled = use_memo(move || state.read().nav_disabled(PageNav::Last));

    rsx! {
        div {
            class: "pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 16px;
            ",

            NavigationButton { icon: MdFirstPage, label: "First", disabled: first_disabled(), onclick: move |_| navigate(PageNav::First) }
            NavigationButton { icon: MdChevronLeft, label: "Previous", disabled: first_disabled(), onclick: move |_| navigate(PageNav::Previous) }

            for item in window() {
                PageWindowEntry { key: "{item.render_key()}", item, navigate }
            }

            NavigationButton { icon: MdChevronRight, label: "Next", disabled: last_disabled(), onclick: move |_| navigate(PageNav::Next) }
            NavigationButton { icon: MdLastPage, label: "Last", disabled: last_disabled(), onclick: move |_| navigate(PageNav::Last) }
        }
    }
}

#[component]
fn PageWindowEntry(item: PageWindowItem, navigate: Callback<PageNav>) -> Element {
    match item {
        PageWindowItem::Page { number, active } => rsx! {
            PageNumberButton { number, active, onclick: move |_| navigate(PageNav::Jump(number)) }
        },
        PageWindowItem::Ellipsis(_) => rsx! {
            span { style: "color: rgba(0,0,0,0.5);", "..." }
        },
    }
}

#[component]
fn PageNumberButton(number: u64, active: bool, onclick: Callback<()>) -> Element {
    let background = if active { "#1C212D" } else { "white" };
    let color = if active { "white" } else { "black" };
    rsx! {
        button {
            class: if active { "active" } else { "" },
            style: "
                min-width: 32px;
                height: 32px;
                background: {background};
                color: {color};
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 8px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: pointer;
            ",
            onclick: move |_| onclick(()),
            "{number}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 2px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}
