//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// JSON Mother
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    /// A complete address entry as returned by the geocode endpoint.
    #[must_use]
    pub fn address() -> Value {
        json!({
            "Title": null,
            "Address1": "7487 Prince Sultan, Thuwal",
            "Address2": "THUWAL 23955 - 3468",
            "ObjLatLng": "22.3095 39.1044",
            "BuildingNumber": "3468",
            "Street": "Prince Sultan",
            "District": "KAUST",
            "City": "THUWAL",
            "PostCode": "23955",
            "AdditionalNumber": "7487",
            "UnitNumber": "",
            "RegionName": "Makkah",
            "IsPrimaryAddress": "True",
            "Latitude": "22.3095",
            "Longitude": "39.1044",
            "RegionId": "6"
        })
    }

    /// A POI entry: titled, sparse address fields.
    #[must_use]
    pub fn poi() -> Value {
        json!({
            "Title": "SABB ATM",
            "BuildingNumber": 2292,
            "Street": "King Abdullah",
            "City": "THUWAL",
            "PostCode": 23955,
            "Latitude": 22.32,
            "Longitude": 39.09
        })
    }

    /// A successful search envelope.
    #[must_use]
    pub fn search_response(records: &[Value], total: u64) -> Value {
        json!({
            "success": true,
            "Addresses": records,
            "totalSearchResults": total
        })
    }

    /// A successful lookup envelope with `(Id, Name)` entries under `key`.
    #[must_use]
    pub fn lookup_response(key: &str, entries: &[(&str, &str)]) -> Value {
        let items: Vec<Value> = entries
            .iter()
            .map(|(id, name)| json!({"Id": id, "Name": name}))
            .collect();
        let mut body = json!({"success": true});
        body[key] = Value::Array(items);
        body
    }
}

// ============================================================================
// Property Strategies
// ============================================================================

/// Any value the service may send for a record field, truthy or falsy.
pub fn json_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!(0)),
        Just(json!(0.0)),
        Just(json!(false)),
        Just(json!(true)),
        "[A-Za-z0-9 ,.-]{1,16}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6_f64..1.0e6).prop_map(Value::from),
    ]
}

/// A random subset of `keys` in random order, each paired with a field value.
pub fn json_entries(
    keys: &'static [&'static str],
) -> impl Strategy<Value = Vec<(&'static str, Value)>> {
    proptest::sample::subsequence(keys.to_vec(), 0..=keys.len())
        .prop_shuffle()
        .prop_flat_map(|picked| {
            let len = picked.len();
            (Just(picked), proptest::collection::vec(json_field_value(), len))
        })
        .prop_map(|(picked, values)| picked.into_iter().zip(values).collect())
}

/// Render entries as JSON object text, keeping their order.
#[must_use]
pub fn object_text(entries: &[(&str, Value)]) -> String {
    let body: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}:{value}", Value::from(*key)))
        .collect();
    format!("{{{}}}", body.join(","))
}
