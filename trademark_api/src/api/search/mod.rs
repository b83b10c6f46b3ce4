//! Search request construction, execution and response shaping.

mod search_trademarks;
pub use search_trademarks::{decode_search_response, search_trademarks};

pub mod search_request;
