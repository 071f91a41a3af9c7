//! Network Layer
//!
//! HTTP access to the admin API.

mod api;

pub use api::ApiClient;
