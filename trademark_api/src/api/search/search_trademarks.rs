//! Search endpoint call and response shaping.

use common::{
    search_query::SearchQuery,
    search_result::{FacetBucket, SearchResultPage, TrademarkRecord},
};

use crate::{
    api::search::search_request::build_search_request,
    api_utils::trademarkia_utils::{RawSearchResponse, RawSearchResultAggregation, RawSearchResultHit, TrademarkApiClient},
    error::TrademarkApiError,
};

impl TrademarkApiClient {
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResultPage, TrademarkApiError> {
        search_trademarks(self, query).await
    }
}

/// Runs one search for `query` and returns a fully decoded page.
pub async fn search_trademarks(client: &TrademarkApiClient, query: &SearchQuery) -> Result<SearchResultPage, TrademarkApiError> {
    let body = build_search_request(query);
    let raw = client.post_search(&body).await?;
    decode_search_response(raw)
}

pub fn decode_search_response(raw: RawSearchResponse) -> Result<SearchResultPage, TrademarkApiError> {
    let body = raw.body;
    let results = body.hits.hits.unwrap_or_default().into_iter().map(hit_to_record).collect::<Vec<_>>();
    Ok(SearchResultPage {
        results,
        owners: decode_buckets("current_owners", body.aggregations.current_owners)?,
        attorneys: decode_buckets("attorneys", body.aggregations.attorneys)?,
        classes: decode_buckets("class_codes", body.aggregations.class_codes)?,
        correspondents: decode_buckets("law_firms", body.aggregations.law_firms)?,
        total_hits: body.hits.total.value,
    })
}

fn hit_to_record(hit: RawSearchResultHit) -> TrademarkRecord {
    let mut record = hit._source;
    if let Some(icon) = hit.class_icon.and_then(json_scalar_to_string) {
        record.class_icon = Some(icon);
    }
    if let Some(date) = hit.history_date.and_then(json_scalar_to_string) {
        record.history_date = Some(date);
    }
    record
}

fn json_scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

// Buckets keep the API order; string and numeric keys are both accepted.
fn decode_buckets(facet: &'static str, aggregation: RawSearchResultAggregation) -> Result<Vec<FacetBucket>, TrademarkApiError> {
    aggregation
        .buckets
        .into_iter()
        .map(|bucket| {
            let key = match bucket.key {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => return Err(TrademarkApiError::InvalidFacetKey { facet, key: other.to_string() }),
            };
            Ok(FacetBucket { key, count: bucket.doc_count })
        })
        .collect()
}
