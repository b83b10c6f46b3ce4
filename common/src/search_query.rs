//! Shared search query models and helpers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Registered,
    Pending,
    Abandoned,
    Others,
}

impl StatusFilter {
    pub const ALL_OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Registered,
        StatusFilter::Pending,
        StatusFilter::Abandoned,
        StatusFilter::Others,
    ];

    /// Value sent to the API, `None` when no status constraint applies.
    pub fn wire_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Registered => Some("registered"),
            StatusFilter::Pending => Some("pending"),
            StatusFilter::Abandoned => Some("abandoned"),
            StatusFilter::Others => Some("others"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Registered => "Registered",
            StatusFilter::Pending => "Pending",
            StatusFilter::Abandoned => "Abandoned",
            StatusFilter::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn wire_value(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Everything that decides which results page is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub term: String,
    pub status: StatusFilter,
    pub owners: BTreeSet<String>,
    pub attorneys: BTreeSet<String>,
    pub classes: BTreeSet<String>,
    pub correspondents: BTreeSet<String>,
    pub sort_order: SortOrder,
    /// 1-based.
    pub page: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            status: StatusFilter::All,
            owners: BTreeSet::new(),
            attorneys: BTreeSet::new(),
            classes: BTreeSet::new(),
            correspondents: BTreeSet::new(),
            sort_order: SortOrder::Desc,
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn from_term(term: impl Into<String>) -> Self {
        Self { term: term.into(), ..Default::default() }
    }

    /// Whitespace-only terms count as empty.
    pub fn has_term(&self) -> bool {
        !self.term.trim().is_empty()
    }
}

/// Fields changed by the filter panel. `None` leaves the current value alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterChange {
    pub selected_owners: Option<BTreeSet<String>>,
    pub selected_attorneys: Option<BTreeSet<String>>,
    pub selected_categories: Option<BTreeSet<String>>,
    pub selected_correspondents: Option<BTreeSet<String>>,
    pub status: Option<StatusFilter>,
}

impl FilterChange {
    /// Overwrites every present field on `query` and sends it back to page 1.
    pub fn merge_into(self, query: &mut SearchQuery) {
        if let Some(owners) = self.selected_owners {
            query.owners = owners;
        }
        if let Some(attorneys) = self.selected_attorneys {
            query.attorneys = attorneys;
        }
        if let Some(classes) = self.selected_categories {
            query.classes = classes;
        }
        if let Some(correspondents) = self.selected_correspondents {
            query.correspondents = correspondents;
        }
        if let Some(status) = self.status {
            query.status = status;
        }
        query.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_starts_on_first_page_sorted_desc() {
        let q = SearchQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.sort_order, SortOrder::Desc);
        assert_eq!(q.status, StatusFilter::All);
        assert!(!q.has_term());
    }

    #[test]
    fn merge_only_overwrites_present_fields() {
        let mut q = SearchQuery::from_term("nike");
        q.owners.insert("NIKE, INC.".to_string());
        q.attorneys.insert("Jane Doe".to_string());
        q.page = 7;

        FilterChange {
            selected_attorneys: Some(BTreeSet::new()),
            status: Some(StatusFilter::Pending),
            ..Default::default()
        }
        .merge_into(&mut q);

        assert!(q.owners.contains("NIKE, INC."));
        assert!(q.attorneys.is_empty());
        assert_eq!(q.status, StatusFilter::Pending);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn empty_change_still_resets_page() {
        let mut q = SearchQuery::from_term("nike");
        q.page = 4;
        FilterChange::default().merge_into(&mut q);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn status_all_has_no_wire_value() {
        assert_eq!(StatusFilter::All.wire_value(), None);
        assert_eq!(StatusFilter::Registered.wire_value(), Some("registered"));
    }
}
