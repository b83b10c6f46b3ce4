//! Failures of a single search request.

/// Network failures and response-shape failures are kept apart here; the page
/// itself only shows that *something* went wrong.
#[derive(Debug, thiserror::Error)]
pub enum TrademarkApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Invalid bucket key in facet {facet}: {key}")]
    InvalidFacetKey { facet: &'static str, key: String },
}

impl TrademarkApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, TrademarkApiError::Network(_))
    }
}
