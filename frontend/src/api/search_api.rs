//! Client API calls for the trademark search endpoint.

use std::sync::OnceLock;

use anyhow::Context;
use common::{search_query::SearchQuery, search_result::SearchResultPage};
use trademark_api::TrademarkApiClient;

static API_CLIENT: OnceLock<TrademarkApiClient> = OnceLock::new();

/// One client for the whole app, so the HTTP connection pool is shared.
fn api_client() -> &'static TrademarkApiClient {
    API_CLIENT.get_or_init(TrademarkApiClient::from_env)
}

pub async fn search_for_results(query: SearchQuery) -> anyhow::Result<SearchResultPage> {
    api_client()
        .search(&query)
        .await
        .with_context(|| format!("searching trademarks for {:?}, page {}", query.term, query.page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_search_shares_one_client() {
        let first = api_client();
        let second = api_client();
        assert!(std::ptr::eq(first, second));
        assert!(!first.endpoint().is_empty());
    }
}
