use common::{
    search_const::{DEFAULT_TRADEMARK_API_URL, TRADEMARK_API_URL_ENV},
    search_result::TrademarkRecord,
};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TrademarkApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResponse {
    pub body: RawSearchBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchBody {
    pub hits: RawSearchResultHits,
    pub aggregations: RawSearchAggregations,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultHits {
    // absent or null means no hits
    #[serde(default)]
    pub hits: Option<Vec<RawSearchResultHit>>,
    pub total: RawSearchResultTotal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultTotal {
    pub value: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResultHit {
    pub _source: TrademarkRecord,
    #[serde(rename = "classIcon", default)]
    pub class_icon: Option<serde_json::Value>,
    #[serde(rename = "historyDate", default)]
    pub history_date: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchAggregations {
    pub current_owners: RawSearchResultAggregation,
    pub attorneys: RawSearchResultAggregation,
    pub class_codes: RawSearchResultAggregation,
    pub law_firms: RawSearchResultAggregation,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct RawSearchResultAggregation {
    pub buckets: Vec<RawSearchResultAggregationBucket>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawSearchResultAggregationBucket {
    pub key: serde_json::Value,
    pub doc_count: u64,
}

/// Thin wrapper over a `reqwest::Client` bound to one search endpoint.
#[derive(Debug, Clone)]
pub struct TrademarkApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for TrademarkApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_TRADEMARK_API_URL)
    }
}

impl TrademarkApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    /// Endpoint from `TRADEMARK_API_URL`, or the default one. The variable is
    /// never visible from inside the browser.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(TRADEMARK_API_URL_ENV).unwrap_or(DEFAULT_TRADEMARK_API_URL.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs `body` as JSON and decodes the raw response envelope.
    pub async fn post_search<B: Serialize + ?Sized>(&self, body: &B) -> Result<RawSearchResponse, TrademarkApiError> {
        debug!("SEARCH REQUEST: {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            warn!("SEARCH FAILED: {}: len = {}", status, response_txt.len());
            return Err(TrademarkApiError::HttpStatus { status: status.as_u16(), body: response_txt });
        }
        info!("SEARCH RESPONSE: len = {}", response_txt.len());
        let response: RawSearchResponse = serde_json::from_str(&response_txt)?;
        Ok(response)
    }
}
