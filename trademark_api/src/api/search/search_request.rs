//! Request body builder for trademark searches.

use common::{search_const::PAGE_SIZE, search_query::SearchQuery};
use serde::{Deserialize, Serialize};

/// JSON body expected by the search endpoint. Fields the page never sets are
/// sent as fixed empty placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequestBody {
    pub input_query: String,
    pub input_query_type: String,
    pub sort_by: String,
    pub status: Vec<String>,
    pub exact_match: bool,
    pub date_query: bool,
    pub owners: Vec<String>,
    pub attorneys: Vec<String>,
    pub law_firms: Vec<String>,
    pub mark_description_description: Vec<String>,
    pub classes: Vec<String>,
    pub page: u64,
    pub rows: u64,
    pub sort_order: String,
    pub states: Vec<String>,
    pub counties: Vec<String>,
}

pub fn build_search_request(query: &SearchQuery) -> SearchRequestBody {
    SearchRequestBody {
        input_query: query.term.clone(),
        input_query_type: String::new(),
        sort_by: "default".to_string(),
        status: query.status.wire_value().map(|s| vec![s.to_string()]).unwrap_or_default(),
        exact_match: false,
        date_query: false,
        owners: query.owners.iter().cloned().collect(),
        attorneys: query.attorneys.iter().cloned().collect(),
        law_firms: query.correspondents.iter().cloned().collect(),
        mark_description_description: vec![],
        classes: query.classes.iter().cloned().collect(),
        page: query.page.max(1),
        rows: PAGE_SIZE,
        sort_order: query.sort_order.wire_value().to_string(),
        states: vec![],
        counties: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::{SortOrder, StatusFilter};
    use serde_json::json;

    #[test]
    fn default_query_body() {
        let body = build_search_request(&SearchQuery::from_term("check"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({
            "input_query": "check",
            "input_query_type": "",
            "sort_by": "default",
            "status": [],
            "exact_match": false,
            "date_query": false,
            "owners": [],
            "attorneys": [],
            "law_firms": [],
            "mark_description_description": [],
            "classes": [],
            "page": 1,
            "rows": 10,
            "sort_order": "desc",
            "states": [],
            "counties": [],
        }));
    }

    #[test]
    fn filters_and_sort_are_carried() {
        let mut query = SearchQuery::from_term("nike");
        query.status = StatusFilter::Abandoned;
        query.owners.insert("NIKE, INC.".to_string());
        query.correspondents.insert("Banner & Witcoff".to_string());
        query.classes.insert("25".to_string());
        query.sort_order = SortOrder::Asc;
        query.page = 3;

        let body = build_search_request(&query);
        assert_eq!(body.status, vec!["abandoned".to_string()]);
        assert_eq!(body.owners, vec!["NIKE, INC.".to_string()]);
        assert_eq!(body.law_firms, vec!["Banner & Witcoff".to_string()]);
        assert!(body.attorneys.is_empty());
        assert_eq!(body.classes, vec!["25".to_string()]);
        assert_eq!(body.sort_order, "asc");
        assert_eq!(body.page, 3);
    }
}
