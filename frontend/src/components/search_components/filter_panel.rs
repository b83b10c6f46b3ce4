//! Sidebar with status, facet checklists and the list/grid toggle.
//!
//! The panel owns no filter state: it renders the selections it is given and
//! reports each edit as a [`FilterChange`] holding only the edited field.

use std::collections::BTreeSet;

use common::{
    search_query::{FilterChange, SearchQuery, StatusFilter},
    search_result::FacetBucket,
    search_state::{FacetLists, ViewType},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdViewList, MdViewModule}, md_navigation_icons::{MdArrowDropDown, MdArrowDropUp}, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked}}};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FacetKind {
    Owners,
    LawFirms,
    Attorneys,
    Classes,
}

impl FacetKind {
    fn display_name(&self) -> &'static str {
        match self {
            FacetKind::Owners => "Owners",
            FacetKind::LawFirms => "Law Firms",
            FacetKind::Attorneys => "Attorneys",
            FacetKind::Classes => "Classes",
        }
    }

    fn buckets<'a>(&self, facets: &'a FacetLists) -> &'a Vec<FacetBucket> {
        match self {
            FacetKind::Owners => &facets.owners,
            FacetKind::LawFirms => &facets.correspondents,
            FacetKind::Attorneys => &facets.attorneys,
            FacetKind::Classes => &facets.categories,
        }
    }

    fn selected<'a>(&self, query: &'a SearchQuery) -> &'a BTreeSet<String> {
        match self {
            FacetKind::Owners => &query.owners,
            FacetKind::LawFirms => &query.correspondents,
            FacetKind::Attorneys => &query.attorneys,
            FacetKind::Classes => &query.classes,
        }
    }

    fn change(&self, selected: BTreeSet<String>) -> FilterChange {
        match self {
            FacetKind::Owners => FilterChange { selected_owners: Some(selected), ..Default::default() },
            FacetKind::LawFirms => FilterChange { selected_correspondents: Some(selected), ..Default::default() },
            FacetKind::Attorneys => FilterChange { selected_attorneys: Some(selected), ..Default::default() },
            FacetKind::Classes => FilterChange { selected_categories: Some(selected), ..Default::default() },
        }
    }
}

#[component]
pub fn FilterPanel(
    facets: ReadSignal<FacetLists>,
    current_filters: ReadSignal<SearchQuery>,
    view_type: ReadSignal<ViewType>,
    on_filter_change: Callback<FilterChange>,
    on_view_change: Callback<ViewType>,
) -> Element {
    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background: white;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 10px;
                padding: 12px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
            ",
            StatusFilterSection { current_status: current_filters.read().status, on_filter_change }
            for kind in [FacetKind::Owners, FacetKind::LawFirms, FacetKind::Attorneys, FacetKind::Classes] {
                FacetSection {
                    key: "{kind.display_name()}",
                    kind,
                    buckets: kind.buckets(&facets.read()).clone(),
                    selected: kind.selected(&current_filters.read()).clone(),
                    on_filter_change,
                }
            }
            ViewTypeToggle { view_type, on_view_change }
        }
    }
}

#[component]
fn StatusFilterSection(current_status: StatusFilter, on_filter_change: Callback<FilterChange>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            div { style: "font-size: 16px; font-weight: 600;", "Status" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for status in StatusFilter::ALL_OPTIONS {
                    button {
                        key: "{status.display_name()}",
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 4px;
                            border: none;
                            background: none;
                            cursor: pointer;
                            font-size: 15px;
                        ",
                        onclick: move |_| {
                            on_filter_change(FilterChange { status: Some(status), ..Default::default() });
                        },
                        if status == current_status {
                            Icon { icon: MdRadioButtonChecked, style: "width: 20px; height: 20px; color: #F97316;" }
                        } else {
                            Icon { icon: MdRadioButtonUnchecked, style: "width: 20px; height: 20px; color: black;" }
                        }
                        "{status.display_name()}"
                    }
                }
            }
        }
    }
}

#[component]
fn FacetSection(kind: FacetKind, buckets: Vec<FacetBucket>, selected: BTreeSet<String>, on_filter_change: Callback<FilterChange>) -> Element {
    let mut expanded = use_signal(|| kind == FacetKind::Owners);
    let mut local_search = use_signal(String::new);

    let needle = local_search.read().to_lowercase();
    let visible = buckets
        .iter()
        .filter(|bucket| needle.is_empty() || bucket.key.to_lowercase().contains(&needle))
        .cloned()
        .collect::<Vec<_>>();
    // selections the API no longer returns a bucket for stay visible so they can be removed
    let returned = buckets.iter().map(|b| b.key.clone()).collect::<BTreeSet<_>>();
    let missing = selected.difference(&returned).cloned().collect::<Vec<_>>();
    let selected_count = selected.len();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; border-top: 1px solid rgba(0,0,0,0.1); padding-top: 8px;",
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 16px;
                    font-weight: 600;
                    padding: 0px;
                ",
                onclick: move |_| {
                    let now = *expanded.read();
                    expanded.set(!now);
                },
                "{kind.display_name()}"
                if selected_count > 0 {
                    span { style: "color: #F97316; margin-left: 6px;", "({selected_count})" }
                }
                div { style: "flex: 1 1 auto;" }
                if expanded() {
                    Icon { icon: MdArrowDropUp, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
                }
            }
            if expanded() {
                input {
                    r#type: "text",
                    placeholder: "Search {kind.display_name()}",
                    style: "border: 1px solid rgba(0,0,0,0.2); border-radius: 6px; padding: 4px 8px; font-size: 14px;",
                    value: "{local_search}",
                    oninput: move |e: Event<FormData>| local_search.set(e.value()),
                }
                ul {
                    style: "list-style: none; padding: 0px; margin: 0px; max-height: 240px; overflow-y: auto;",
                    for missing_key in missing {
                        li {
                            key: "missing-{missing_key}",
                            FacetCheckbox { kind, value: missing_key.clone(), count_txt: "0", selected: selected.clone(), on_filter_change }
                        }
                    }
                    for bucket in visible {
                        li {
                            key: "{bucket.key}",
                            FacetCheckbox { kind, value: bucket.key.clone(), count_txt: bucket.count.to_string(), selected: selected.clone(), on_filter_change }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(kind: FacetKind, value: String, count_txt: String, selected: BTreeSet<String>, on_filter_change: Callback<FilterChange>) -> Element {
    let is_checked = selected.contains(&value);
    let label = value.clone();
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                let mut next = selected.clone();
                if is_checked {
                    next.remove(&value);
                } else {
                    next.insert(value.clone());
                }
                on_filter_change(kind.change(next));
            },

            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 15px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{label}"
            }
            div { style: "flex: 1 1 auto;", }
            div {
                style: "font-size: 15px; color: rgba(28, 33, 45, 0.7); flex-shrink: 0;",
                "{count_txt}"
            }
        }
    }
}

#[component]
fn ViewTypeToggle(view_type: ReadSignal<ViewType>, on_view_change: Callback<ViewType>) -> Element {
    let list_color = if view_type() == ViewType::List { "#F97316" } else { "rgba(0,0,0,0.5)" };
    let grid_color = if view_type() == ViewType::Grid { "#F97316" } else { "rgba(0,0,0,0.5)" };
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 8px; align-items: center; border-top: 1px solid rgba(0,0,0,0.1); padding-top: 8px;",
            div { style: "font-size: 16px; font-weight: 600; flex: 1 1 auto;", "Display" }
            button {
                title: "List view",
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| on_view_change(ViewType::List),
                Icon { icon: MdViewList, style: "width: 24px; height: 24px; color: {list_color};" }
            }
            button {
                title: "Grid view",
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| on_view_change(ViewType::Grid),
                Icon { icon: MdViewModule, style: "width: 24px; height: 24px; color: {grid_color};" }
            }
        }
    }
}
