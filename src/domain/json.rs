//! JSON field helpers shared by every record type.
//!
//! The service is loose about types: the same field may arrive as a string,
//! a number, `null`, or not at all. Records normalise every declared field to
//! a `String`, with anything falsy collapsing to `""`.

use serde_json::{Map, Value};

// ============================================================================
// FromJson
// ============================================================================

/// Construction of a record from one JSON object.
///
/// Mapping is total: unknown keys are ignored and missing or falsy values
/// become empty strings, so a malformed entry yields an all-default record
/// rather than an error.
pub trait FromJson: Sized {
    /// Build a record from a JSON object.
    fn from_json(json: &Value) -> Self;
}

pub(crate) mod sealed {
    use serde_json::Value;

    /// Records that keep the JSON object they were built from.
    pub trait RetainsRaw {
        fn set_raw(&mut self, raw: Value);
    }
}

/// Construction with extra key/value pairs merged over the source object.
///
/// Implemented for every record in this crate.
pub trait FromJsonWith: FromJson + sealed::RetainsRaw {
    /// Build a record after merging `overrides` on top of `json`.
    ///
    /// The retained raw JSON stays the original, un-merged object.
    #[must_use]
    fn from_json_with<I, K, V>(json: &Value, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut merged = match json {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        for (key, value) in overrides {
            merged.insert(key.into(), value.into());
        }

        let mut record = Self::from_json(&Value::Object(merged));
        record.set_raw(json.clone());
        record
    }
}

impl<T: FromJson + sealed::RetainsRaw> FromJsonWith for T {}

/// Map a list of JSON objects into records, preserving order.
///
/// Anything other than an array maps to an empty list.
#[must_use]
pub fn records_from<T: FromJson>(value: &Value) -> Vec<T> {
    value
        .as_array()
        .map(|entries| entries.iter().map(T::from_json).collect())
        .unwrap_or_default()
}

// ============================================================================
// Field Helpers
// ============================================================================

/// Read `key` from `json` as a display string.
///
/// Present and truthy values pass through; absent or falsy values map to `""`.
#[must_use]
pub fn field(json: &Value, key: &str) -> String {
    json.get(key).map(truthy_string).unwrap_or_default()
}

/// Convert a JSON value into a string, collapsing falsy values to `""`.
#[must_use]
pub fn truthy_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.as_f64().is_some_and(|f| f == 0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Value::Array(items) if items.is_empty() => String::new(),
        Value::Object(map) if map.is_empty() => String::new(),
        other => other.to_string(),
    }
}

/// Read a total-count field that may be a number or a numeric string.
#[must_use]
pub fn count_field(json: &Value, key: &str) -> u64 {
    match json.get(key) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Whether the response envelope reports `success: true`.
///
/// Absent, `null` and non-boolean values all count as failure.
#[must_use]
pub fn is_success(json: &Value) -> bool {
    json.get("success").and_then(Value::as_bool).unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================
