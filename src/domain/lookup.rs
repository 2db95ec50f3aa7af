//! Lookup list entries: regions, cities, districts and service categories.
//!
//! Every lookup endpoint returns a flat array of `{ "Id": .., "Name": .. }`
//! objects. Each entry type differs only in its display label.

use serde_json::Value;
use std::fmt;

use super::json::sealed::RetainsRaw;
use super::json::{FromJson, field};

macro_rules! lookup_record {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            /// Service identifier, kept as a string.
            pub id: String,
            /// Display name in the requested language.
            pub name: String,
            /// The JSON object this entry was built from.
            pub raw: Value,
        }

        impl FromJson for $name {
            fn from_json(json: &Value) -> Self {
                Self {
                    id: field(json, "Id"),
                    name: field(json, "Name"),
                    raw: json.clone(),
                }
            }
        }

        impl RetainsRaw for $name {
            fn set_raw(&mut self, raw: Value) {
                self.raw = raw;
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " (ID={}, Name={})"), self.id, self.name)
            }
        }
    };
}

lookup_record!(
    /// An administrative region (e.g. Riyadh, Makkah).
    Region,
    "Region"
);

lookup_record!(
    /// A city within a region.
    City,
    "City"
);

lookup_record!(
    /// A district within a city.
    District,
    "District"
);

lookup_record!(
    /// A top-level POI service category.
    ServiceCategory,
    "Category"
);

lookup_record!(
    /// A POI service sub-category.
    ServiceSubCategory,
    "Sub-Category"
);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::json::records_from;
    use serde_json::json;

    #[test]
    fn test_lookup_entry_mapping() {
        let region = Region::from_json(&json!({"Id": "1", "Name": "Riyadh", "Extra": 9}));
        assert_eq!(region.id, "1");
        assert_eq!(region.name, "Riyadh");

        let city = City::from_json(&json!({"Id": 3, "Name": null}));
        assert_eq!(city.id, "3");
        assert_eq!(city.name, "");

        let district = District::from_json(&json!({}));
        assert_eq!(district.id, "");
        assert_eq!(district.name, "");
    }

    #[test]
    fn test_records_from_keeps_order() {
        let json = json!([
            {"Id": "101", "Name": "Banks"},
            {"Id": "102", "Name": "Hospitals"},
        ]);
        let categories: Vec<ServiceCategory> = records_from(&json);
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["101", "102"]);

        let none: Vec<ServiceCategory> = records_from(&Value::Null);
        assert!(none.is_empty());
    }

    #[test]
    fn test_display_labels() {
        let json = json!({"Id": "7", "Name": "Test"});
        insta::assert_snapshot!(Region::from_json(&json), @"Region (ID=7, Name=Test)");
        insta::assert_snapshot!(City::from_json(&json), @"City (ID=7, Name=Test)");
        insta::assert_snapshot!(District::from_json(&json), @"District (ID=7, Name=Test)");
        insta::assert_snapshot!(ServiceCategory::from_json(&json), @"Category (ID=7, Name=Test)");
        insta::assert_snapshot!(
            ServiceSubCategory::from_json(&json),
            @"Sub-Category (ID=7, Name=Test)"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::json::truthy_string;
    use crate::test_utils::{json_entries, object_text};
    use proptest::prelude::*;

    const LOOKUP_FIELDS: [&str; 2] = ["Id", "Name"];

    fn expected(entries: &[(&str, Value)], key: &str) -> String {
        entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| truthy_string(value))
            .unwrap_or_default()
    }

    proptest! {
        /// Id and Name map through `truthy_string`, absent keys to ""
        #[test]
        fn id_and_name_present_or_empty(entries in json_entries(&LOOKUP_FIELDS)) {
            let json: Value = serde_json::from_str(&object_text(&entries)).unwrap();
            let id = expected(&entries, "Id");
            let name = expected(&entries, "Name");

            let region = Region::from_json(&json);
            prop_assert_eq!((&region.id, &region.name), (&id, &name));
            let city = City::from_json(&json);
            prop_assert_eq!((&city.id, &city.name), (&id, &name));
            let district = District::from_json(&json);
            prop_assert_eq!((&district.id, &district.name), (&id, &name));
            let category = ServiceCategory::from_json(&json);
            prop_assert_eq!((&category.id, &category.name), (&id, &name));
            let sub_category = ServiceSubCategory::from_json(&json);
            prop_assert_eq!((&sub_category.id, &sub_category.name), (&id, &name));
        }

        /// Key order in the source text does not change the entry
        #[test]
        fn lookup_key_order_is_irrelevant(entries in json_entries(&LOOKUP_FIELDS)) {
            let forward: Value = serde_json::from_str(&object_text(&entries)).unwrap();
            let reversed_entries: Vec<_> = entries.iter().rev().cloned().collect();
            let reversed: Value = serde_json::from_str(&object_text(&reversed_entries)).unwrap();

            prop_assert_eq!(Region::from_json(&forward), Region::from_json(&reversed));
        }
    }
}
