//! HTTP client for the National Address API.
//!
//! - [`address`] - `NationalAddressClient` and its per-endpoint methods
//! - [`endpoints`] - endpoint paths and response record keys
//! - [`http`] - transport configuration
//! - [`query`] - query-string assembly

pub mod address;
pub mod endpoints;
pub mod http;
pub mod query;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::NationalAddressClient;
pub use endpoints::{API_PREFIX, DEFAULT_BASE_URL, Endpoint};
pub use http::{API_KEY_HEADER, HttpConfig};
pub use query::QueryParams;
