//! National Address record.
//!
//! Every search endpoint (address and POI alike) returns entries of this
//! shape under the `Addresses` key.

use serde_json::Value;
use std::fmt;

use super::json::sealed::RetainsRaw;
use super::json::{FromJson, field};

// ============================================================================
// Address
// ============================================================================

/// A single address (or point of interest) returned by the service.
///
/// All fields are strings and are never absent: anything the service omits
/// or sends as a falsy value is an empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    /// Place title, mostly populated for POI results.
    pub title: String,
    /// First formatted address line.
    pub address1: String,
    /// Second formatted address line.
    pub address2: String,
    /// Combined "lat lng" string as sent by the service.
    pub obj_lat_lng: String,
    /// Four-digit building number.
    pub building_number: String,
    /// Street name.
    pub street: String,
    /// District name.
    pub district: String,
    /// City name.
    pub city: String,
    /// Five-digit postal code.
    pub post_code: String,
    /// Four-digit additional number.
    pub additional_number: String,
    /// Unit number within the building.
    pub unit_number: String,
    /// Region name.
    pub region_name: String,
    /// Primary address flag as sent by the service.
    pub is_primary_address: String,
    /// Latitude in decimal degrees.
    pub latitude: String,
    /// Longitude in decimal degrees.
    pub longitude: String,
    /// The JSON object this record was built from.
    pub raw: Value,
}

impl Address {
    /// JSON keys read into typed fields, in declaration order.
    pub const FIELDS: [&'static str; 15] = [
        "Title",
        "Address1",
        "Address2",
        "ObjLatLng",
        "BuildingNumber",
        "Street",
        "District",
        "City",
        "PostCode",
        "AdditionalNumber",
        "UnitNumber",
        "RegionName",
        "IsPrimaryAddress",
        "Latitude",
        "Longitude",
    ];

    /// Returns the latitude/longitude pair when both parse as numbers.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse().ok()?;
        let long = self.longitude.trim().parse().ok()?;
        Some((lat, long))
    }

    /// Whether the service flagged this as the primary address.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.is_primary_address.eq_ignore_ascii_case("true")
    }
}

impl FromJson for Address {
    fn from_json(json: &Value) -> Self {
        Self {
            title: field(json, "Title"),
            address1: field(json, "Address1"),
            address2: field(json, "Address2"),
            obj_lat_lng: field(json, "ObjLatLng"),
            building_number: field(json, "BuildingNumber"),
            street: field(json, "Street"),
            district: field(json, "District"),
            city: field(json, "City"),
            post_code: field(json, "PostCode"),
            additional_number: field(json, "AdditionalNumber"),
            unit_number: field(json, "UnitNumber"),
            region_name: field(json, "RegionName"),
            is_primary_address: field(json, "IsPrimaryAddress"),
            latitude: field(json, "Latitude"),
            longitude: field(json, "Longitude"),
            raw: json.clone(),
        }
    }
}

impl RetainsRaw for Address {
    fn set_raw(&mut self, raw: Value) {
        self.raw = raw;
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} {} - {}",
            self.building_number,
            self.street,
            self.district,
            self.city,
            self.post_code,
            self.additional_number
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
