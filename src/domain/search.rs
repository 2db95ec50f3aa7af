//! Typed request options for the search operations.
//!
//! Required inputs are plain fields; optional filters are `Option`s and are
//! left out of the request entirely when unset.

use serde::{Deserialize, Serialize};

use super::language::Language;

/// Default search radius for nearest-POI queries, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 0.5;

/// First page of results; the service numbers pages from 1.
pub const FIRST_PAGE: u32 = 1;

// ============================================================================
// Paging
// ============================================================================

/// Language and page shared by every paged search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub language: Language,
    /// 1-based page number.
    pub page: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            page: FIRST_PAGE,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the page number. Page 0 is treated as the first page.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(FIRST_PAGE);
        self
    }
}

// ============================================================================
// Short Address Key
// ============================================================================

/// The building number / post code / additional number triple that
/// identifies an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressKey {
    pub building_number: String,
    pub post_code: String,
    pub additional_number: String,
}

impl AddressKey {
    #[must_use]
    pub fn new(
        building_number: impl ToString,
        post_code: impl ToString,
        additional_number: impl ToString,
    ) -> Self {
        Self {
            building_number: building_number.to_string(),
            post_code: post_code.to_string(),
            additional_number: additional_number.to_string(),
        }
    }

    /// Wire form used by bulk search: `building|post_code|additional`.
    #[must_use]
    pub fn to_bulk_entry(&self) -> String {
        format!(
            "{}|{}|{}",
            self.building_number, self.post_code, self.additional_number
        )
    }
}

impl<A: ToString, B: ToString, C: ToString> From<(A, B, C)> for AddressKey {
    fn from((building_number, post_code, additional_number): (A, B, C)) -> Self {
        Self::new(building_number, post_code, additional_number)
    }
}

/// Serialize keys for the `addressstring` parameter of bulk search.
///
/// Entries keep their order and are joined with `;`.
#[must_use]
pub fn bulk_address_string(keys: &[AddressKey]) -> String {
    keys.iter()
        .map(AddressKey::to_bulk_entry)
        .collect::<Vec<_>>()
        .join(";")
}

// ============================================================================
// Location Filters
// ============================================================================

/// Optional location filters shared by the fixed-parameter searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub city_id: Option<String>,
    pub district_id: Option<String>,
    pub building_number: Option<String>,
    pub post_code: Option<String>,
    pub additional_number: Option<String>,
    pub city_name: Option<String>,
    pub district_name: Option<String>,
    pub street_name: Option<String>,
}

impl LocationFilter {
    #[must_use]
    pub fn city_id(mut self, id: impl ToString) -> Self {
        self.city_id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn district_id(mut self, id: impl ToString) -> Self {
        self.district_id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn building_number(mut self, number: impl ToString) -> Self {
        self.building_number = Some(number.to_string());
        self
    }

    #[must_use]
    pub fn post_code(mut self, code: impl ToString) -> Self {
        self.post_code = Some(code.to_string());
        self
    }

    #[must_use]
    pub fn additional_number(mut self, number: impl ToString) -> Self {
        self.additional_number = Some(number.to_string());
        self
    }

    #[must_use]
    pub fn city_name(mut self, name: impl Into<String>) -> Self {
        self.city_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn district_name(mut self, name: impl Into<String>) -> Self {
        self.district_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn street_name(mut self, name: impl Into<String>) -> Self {
        self.street_name = Some(name.into());
        self
    }

    /// Whether no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Per-Operation Requests
// ============================================================================

/// Input for `fixed_search`: every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedSearch {
    pub location: LocationFilter,
    pub options: SearchOptions,
}

impl FixedSearch {
    #[must_use]
    pub fn new(location: LocationFilter) -> Self {
        Self {
            location,
            options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// Input for `nearest_poi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPoi {
    pub lat: f64,
    pub long: f64,
    /// Search radius in kilometres.
    pub radius: f64,
    pub options: SearchOptions,
}

impl NearestPoi {
    #[must_use]
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            lat,
            long,
            radius: DEFAULT_RADIUS_KM,
            options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// Input for `poi_fixed_search`: a service query plus optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiFixedSearch {
    /// Free text describing the service, e.g. `"atm"`.
    pub service: String,
    pub location: LocationFilter,
    pub service_category_id: Option<String>,
    pub service_subcategory_id: Option<String>,
    pub region_id: Option<String>,
    pub options: SearchOptions,
}

impl PoiFixedSearch {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn location(mut self, location: LocationFilter) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn service_category_id(mut self, id: impl ToString) -> Self {
        self.service_category_id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn service_subcategory_id(mut self, id: impl ToString) -> Self {
        self.service_subcategory_id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn region_id(mut self, id: impl ToString) -> Self {
        self.region_id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
