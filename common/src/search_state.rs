//! State of the search results page and every transition it goes through.
//!
//! Rendering code only reads from [`SearchPageState`] and calls one method
//! per user action or fetch completion, so each transition can be tested
//! without a UI.

use serde::{Deserialize, Serialize};

use crate::{
    pagination::{self, PageNav},
    search_query::{FilterChange, SearchQuery, SortOrder},
    search_result::{FacetBucket, SearchResultPage, TrademarkRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewType {
    #[default]
    List,
    Grid,
}

impl ViewType {
    pub fn css_class(&self) -> &'static str {
        match self {
            ViewType::List => "list-view",
            ViewType::Grid => "grid-view",
        }
    }
}

/// Facet bucket lists handed to the filter panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetLists {
    pub owners: Vec<FacetBucket>,
    pub attorneys: Vec<FacetBucket>,
    pub categories: Vec<FacetBucket>,
    pub correspondents: Vec<FacetBucket>,
}

/// Issued by [`SearchPageState::begin_fetch`]; the completion must hand `seq` back.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPageState {
    pub query: SearchQuery,
    pub show_filters: bool,
    pub view_type: ViewType,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<TrademarkRecord>,
    pub facets: FacetLists,
    pub total_hits: u64,
    pub total_pages: u64,
    latest_seq: u64,
}

impl Default for SearchPageState {
    fn default() -> Self {
        Self {
            query: SearchQuery::default(),
            show_filters: false,
            view_type: ViewType::List,
            loading: false,
            error: None,
            results: Vec::new(),
            facets: FacetLists::default(),
            total_hits: 0,
            // one page until the first response says otherwise
            total_pages: 1,
            latest_seq: 0,
        }
    }
}

impl SearchPageState {
    pub fn new(term: impl Into<String>) -> Self {
        Self { query: SearchQuery::from_term(term), ..Default::default() }
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.query.term {
            return;
        }
        self.query.term = term;
        self.query.page = 1;
    }

    pub fn navigate(&mut self, nav: PageNav) {
        if pagination::is_nav_disabled(self.query.page, self.total_pages, nav) {
            return;
        }
        self.query.page = pagination::navigate(self.query.page, self.total_pages, nav);
    }

    pub fn apply_filter_change(&mut self, change: FilterChange) {
        change.merge_into(&mut self.query);
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.query.sort_order = sort_order;
        self.query.page = 1;
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        self.view_type = view_type;
    }

    /// Starts a request for the current query. Returns `None`, and leaves the
    /// state untouched, when there is no search term.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.query.has_term() {
            return None;
        }
        self.latest_seq += 1;
        self.loading = true;
        Some(FetchTicket { seq: self.latest_seq, query: self.query.clone() })
    }

    /// Applies a successful response. Responses for superseded requests are
    /// dropped; returns whether the state changed.
    pub fn receive_results(&mut self, seq: u64, page: SearchResultPage) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.total_pages = page.total_pages();
        self.total_hits = page.total_hits;
        self.results = page.results;
        self.facets = FacetLists {
            owners: page.owners,
            attorneys: page.attorneys,
            categories: page.classes,
            correspondents: page.correspondents,
        };
        self.error = None;
        self.loading = false;
        true
    }

    /// Records a failed request. Results from the previous response stay in place.
    pub fn receive_error(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        true
    }

    pub fn nav_disabled(&self, nav: PageNav) -> bool {
        pagination::is_nav_disabled(self.query.page, self.total_pages, nav)
    }

    pub fn page_window(&self) -> Vec<pagination::PageWindowItem> {
        pagination::page_window(self.query.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::search_query::StatusFilter;

    fn page_with_hits(total_hits: u64, marks: &[&str]) -> SearchResultPage {
        SearchResultPage {
            results: marks
                .iter()
                .map(|m| TrademarkRecord { mark_identification: Some(m.to_string()), ..Default::default() })
                .collect(),
            owners: vec![FacetBucket { key: "NIKE, INC.".to_string(), count: 3 }],
            attorneys: vec![],
            classes: vec![FacetBucket { key: "25".to_string(), count: 2 }],
            correspondents: vec![],
            total_hits,
        }
    }

    fn state_on_page(page: u64) -> SearchPageState {
        let mut state = SearchPageState::new("nike");
        let ticket = state.begin_fetch().unwrap();
        state.receive_results(ticket.seq, page_with_hits(95, &["NIKE"]));
        state.navigate(PageNav::Jump(page));
        assert_eq!(state.query.page, page);
        state
    }

    #[test]
    fn empty_term_never_fetches() {
        let mut state = SearchPageState::new("");
        assert_eq!(state.begin_fetch(), None);
        assert!(!state.loading);
        assert_eq!(state.latest_seq(), 0);

        state.set_term("   ");
        assert_eq!(state.begin_fetch(), None);
        assert!(!state.loading);
    }

    #[test]
    fn successful_fetch_replaces_everything() {
        let mut state = SearchPageState::new("nike");
        let ticket = state.begin_fetch().unwrap();
        assert!(state.loading);
        assert_eq!(ticket.query.term, "nike");

        assert!(state.receive_results(ticket.seq, page_with_hits(95, &["NIKE", "NIKE AIR"])));
        assert!(!state.loading);
        assert_eq!(state.total_hits, 95);
        assert_eq!(state.total_pages, 10);
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.facets.owners.len(), 1);
        assert_eq!(state.facets.categories[0].key, "25");
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = SearchPageState::new("nike");
        let first = state.begin_fetch().unwrap();
        state.navigate(PageNav::Jump(1));
        let second = state.begin_fetch().unwrap();
        assert!(second.seq > first.seq);

        assert!(state.receive_results(second.seq, page_with_hits(20, &["NEW"])));
        assert!(!state.receive_results(first.seq, page_with_hits(95, &["OLD"])));
        assert!(!state.receive_error(first.seq, "boom"));

        assert_eq!(state.results[0].mark_identification.as_deref(), Some("NEW"));
        assert_eq!(state.total_hits, 20);
        assert_eq!(state.error, None);
    }

    #[test]
    fn loading_stays_on_until_latest_request_completes() {
        let mut state = SearchPageState::new("nike");
        let first = state.begin_fetch().unwrap();
        let _second = state.begin_fetch().unwrap();
        state.receive_results(first.seq, page_with_hits(1, &["OLD"]));
        assert!(state.loading);
    }

    #[test]
    fn error_keeps_previous_results() {
        let mut state = SearchPageState::new("nike");
        let ok = state.begin_fetch().unwrap();
        state.receive_results(ok.seq, page_with_hits(95, &["NIKE"]));

        let failing = state.begin_fetch().unwrap();
        assert!(state.receive_error(failing.seq, "Error fetching data"));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Error fetching data"));
        assert_eq!(state.results.len(), 1);

        let retry = state.begin_fetch().unwrap();
        state.receive_results(retry.seq, page_with_hits(3, &["NIKE"]));
        assert_eq!(state.error, None);
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut state = state_on_page(5);
        state.apply_filter_change(FilterChange {
            selected_owners: Some(BTreeSet::from(["NIKE, INC.".to_string()])),
            ..Default::default()
        });
        assert_eq!(state.query.page, 1);
        assert!(state.query.owners.contains("NIKE, INC."));

        let mut state = state_on_page(6);
        state.apply_filter_change(FilterChange { status: Some(StatusFilter::Registered), ..Default::default() });
        assert_eq!(state.query.page, 1);
        assert_eq!(state.query.status, StatusFilter::Registered);
    }

    #[test]
    fn sort_order_change_resets_page() {
        let mut state = state_on_page(4);
        state.set_sort_order(SortOrder::Asc);
        assert_eq!(state.query.page, 1);
        assert_eq!(state.query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn new_term_resets_page_but_same_term_does_not() {
        let mut state = state_on_page(4);
        state.set_term("nike");
        assert_eq!(state.query.page, 4);
        state.set_term("adidas");
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn view_and_panel_toggles_leave_query_alone() {
        let mut state = state_on_page(3);
        let before = state.query.clone();
        state.toggle_filters();
        state.set_view_type(ViewType::Grid);
        assert!(state.show_filters);
        assert_eq!(state.view_type, ViewType::Grid);
        assert_eq!(state.query, before);
    }

    #[test]
    fn disabled_navigation_is_a_no_op() {
        let mut state = state_on_page(1);
        assert!(state.nav_disabled(PageNav::First));
        state.navigate(PageNav::Previous);
        assert_eq!(state.query.page, 1);

        state.navigate(PageNav::Last);
        assert_eq!(state.query.page, 10);
        assert!(state.nav_disabled(PageNav::Last));
        state.navigate(PageNav::Next);
        assert_eq!(state.query.page, 10);
    }
}
