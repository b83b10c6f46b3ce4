//! Constants shared by the API client and the frontend.

/// Number of hits requested per results page.
pub const PAGE_SIZE: u64 = 10;

/// Remote trademark search endpoint.
pub const DEFAULT_TRADEMARK_API_URL: &str = "https://vit-tm-task.api.trademarkia.app/api/v3/us";

/// Environment variable that overrides [`DEFAULT_TRADEMARK_API_URL`].
pub const TRADEMARK_API_URL_ENV: &str = "TRADEMARK_API_URL";
