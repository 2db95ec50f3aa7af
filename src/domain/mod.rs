//! Domain types for the National Address client.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for client operations
//! - [`json`] - `FromJson` capability and field defaulting helpers
//! - [`address`] - Address / POI record
//! - [`lookup`] - Region, city, district and service category entries
//! - [`result_set`] - Paged result container
//! - [`language`] - `E`/`A` language flag
//! - [`search`] - Typed request options per operation

// ============================================================================
// Module Declarations
// ============================================================================

pub mod address;
pub mod error;
pub mod json;
pub mod language;
pub mod lookup;
pub mod result_set;
pub mod search;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::Address;
pub use error::{AddressError, Result};
pub use json::{FromJson, FromJsonWith};
pub use language::Language;
pub use lookup::{City, District, Region, ServiceCategory, ServiceSubCategory};
pub use result_set::ResultSet;
pub use search::{
    AddressKey, DEFAULT_RADIUS_KM, FIRST_PAGE, FixedSearch, LocationFilter, NearestPoi,
    PoiFixedSearch, SearchOptions, bulk_address_string,
};
