use dioxus::{logger::tracing, prelude::*};

use common::{
    pagination::PageNav,
    search_query::{FilterChange, SortOrder},
    search_state::{SearchPageState, ViewType},
};
use crate::{
    api::search_api::search_for_results,
    components::search_components::{
        apply_for_trademark::ApplyForTrademark, filter_panel::FilterPanel, pagination_controls::PaginationControls,
        search_result_list::SearchResultList, search_results_top_bar::SearchResultsTopBar,
    },
    data_definitions::url_param::UrlParam,
};

/// Shown to the user for every kind of failed search; the details go to the log.
const FETCH_ERROR_MESSAGE: &str = "Error fetching data";

fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Search results page
#[component]
pub fn SearchPage(term: UrlParam<String>) -> Element {
    rsx! {
        document::Title { "Trademark Search: {title_ellipsis(term.0.clone())}" }
        SearchPageRootComponent { term: term.0.clone() }
    }
}

/// Page state plus one callback per user action. Children read `state` and
/// never write it directly.
#[derive(Clone, Copy)]
pub struct SearchPageContext {
    pub state: Signal<SearchPageState>,
    pub navigate: Callback<PageNav>,
    pub apply_filter_change: Callback<FilterChange>,
    pub set_sort_order: Callback<SortOrder>,
    pub set_view_type: Callback<ViewType>,
    pub toggle_filters: Callback<()>,
}

#[component]
fn SearchPageRootComponent(term: ReadSignal<String>) -> Element {
    let mut state = use_signal(|| SearchPageState::new(term.peek().clone()));

    // the route is the only source of the search term
    use_effect(move || {
        let new_term = term.read().clone();
        state.write().set_term(new_term);
    });

    // one request per change of the query; `begin_fetch` refuses empty terms
    let query = use_memo(move || state.read().query.clone());
    use_effect(move || {
        let _ = query.read();
        let Some(ticket) = state.write().begin_fetch() else { return };
        tracing::debug!("search #{} for {:?}, page {}", ticket.seq, ticket.query.term, ticket.query.page);
        spawn(async move {
            match search_for_results(ticket.query).await {
                Ok(page) => {
                    if !state.write().receive_results(ticket.seq, page) {
                        tracing::debug!("dropping stale search response #{}", ticket.seq);
                    }
                }
                Err(e) => {
                    tracing::error!("{FETCH_ERROR_MESSAGE}: {e:#}");
                    state.write().receive_error(ticket.seq, FETCH_ERROR_MESSAGE);
                }
            }
        });
    });

    let ctx = use_context_provider(move || SearchPageContext {
        state,
        navigate: Callback::new(move |nav: PageNav| state.write().navigate(nav)),
        apply_filter_change: Callback::new(move |change: FilterChange| state.write().apply_filter_change(change)),
        set_sort_order: Callback::new(move |order: SortOrder| state.write().set_sort_order(order)),
        set_view_type: Callback::new(move |view_type: ViewType| state.write().set_view_type(view_type)),
        toggle_filters: Callback::new(move |_: ()| state.write().toggle_filters()),
    });

    let show_filters = use_memo(move || state.read().show_filters);
    let facets = use_memo(move || state.read().facets.clone());
    let view_type = use_memo(move || state.read().view_type);

    rsx! {
        main {
            id: "x-search-page-root-component",
            class: "home",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            SearchResultsTopBar {}

            div {
                id: "x-search-results-content-wrapper",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    gap: 16px;
                    padding: 16px;
                    box-sizing: border-box;
                    background-color: #ECEEF2;
                "#,
                div {
                    id: "x-search-results-left-panel",
                    style: "
                        flex-grow: 1;
                        min-width: 400px;
                        width: 70%;
                    ",
                    SearchResultList {}
                }
                div {
                    id: "x-search-results-sidebar",
                    class: "sidebar",
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                        min-width: 280px;
                        width: 30%;
                    ",
                    if show_filters() {
                        FilterPanel {
                            facets: facets(),
                            current_filters: query(),
                            view_type: view_type(),
                            on_filter_change: ctx.apply_filter_change,
                            on_view_change: ctx.set_view_type,
                        }
                    }
                    ApplyForTrademark {}
                }
            }

            PaginationControls {}
        }
    }
}
