//! Client for the remote trademark search API.

pub mod api;
pub mod api_utils;
pub mod error;

pub use api_utils::trademarkia_utils::TrademarkApiClient;
pub use error::TrademarkApiError;
