//! Common library exports shared between the API client and the frontend.

extern crate serde;


pub mod search_const;
pub mod search_query;
pub mod search_result;
pub mod pagination;
pub mod trademark_card;
pub mod search_state;
