//! Async client for the Saudi National Address API.
//!
//! The crate is a thin typed layer over the service's REST endpoints:
//! reverse geocoding, address and point-of-interest search, address
//! verification and the region/city/district/category lookup lists.
//!
//! - [`client`] - `NationalAddressClient`, transport settings, query building
//! - [`domain`] - records, result sets, request options and errors
//! - [`config`] - serializable client settings
//!
//! A response with `success=false` is the service's way of saying "no match";
//! it yields an empty result rather than an error. Only configuration,
//! network and body-parse failures are reported as [`AddressError`].

pub mod client;
pub mod config;
pub mod domain;

#[cfg(test)]
mod test_utils;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{HttpConfig, NationalAddressClient};
pub use config::ClientConfig;
pub use domain::{
    Address, AddressError, AddressKey, City, District, FixedSearch, FromJson, FromJsonWith,
    Language, LocationFilter, NearestPoi, PoiFixedSearch, Region, Result, ResultSet,
    SearchOptions, ServiceCategory, ServiceSubCategory,
};
