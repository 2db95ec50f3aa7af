//! Query-string assembly.
//!
//! Parameter names are part of the wire protocol and their casing matters
//! (`cityId` but `cityid` on the lookup endpoints).

use crate::domain::{Language, LocationFilter, SearchOptions};

/// Value of the `format` parameter on every request.
pub const FORMAT: &str = "json";

/// Value of the `encode` parameter where the endpoint accepts it.
pub const ENCODE: &str = "utf8";

/// Ordered query parameters for one request.
///
/// Unset optional values are never added, so the service sees an absent
/// filter rather than an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Add a parameter only when `value` is set.
    #[must_use]
    pub fn with_opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn language(self, language: Language) -> Self {
        self.with("language", language.code())
    }

    /// `format=json`
    #[must_use]
    pub fn format(self) -> Self {
        self.with("format", FORMAT)
    }

    /// `encode=utf8`
    #[must_use]
    pub fn encode(self) -> Self {
        self.with("encode", ENCODE)
    }

    /// Language, format, encode and page: the envelope of every paged search.
    #[must_use]
    pub fn search(self, options: SearchOptions) -> Self {
        self.language(options.language)
            .format()
            .encode()
            .with("page", options.page)
    }

    /// Location filters used by the fixed-parameter searches.
    #[must_use]
    pub fn location(self, filter: &LocationFilter) -> Self {
        self.with_opt("cityId", filter.city_id.as_deref())
            .with_opt("districtId", filter.district_id.as_deref())
            .with_opt("buildingnumber", filter.building_number.as_deref())
            .with_opt("zipcode", filter.post_code.as_deref())
            .with_opt("additionalnumber", filter.additional_number.as_deref())
            .with_opt("cityname", filter.city_name.as_deref())
            .with_opt("districtname", filter.district_name.as_deref())
            .with_opt("streetname", filter.street_name.as_deref())
    }

    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order, ready for `RequestBuilder::query`.
    #[must_use]
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_opt_skips_unset() {
        let query = QueryParams::new()
            .with_opt("cityId", None::<&str>)
            .with_opt("zipcode", Some(23955));
        assert!(!query.contains("cityId"));
        assert_eq!(query.get("zipcode"), Some("23955"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_search_envelope() {
        let options = SearchOptions::default().language(Language::Arabic).page(3);
        let query = QueryParams::new().search(options);
        assert_eq!(
            query.as_pairs(),
            [
                ("language", "A".to_string()),
                ("format", "json".to_string()),
                ("encode", "utf8".to_string()),
                ("page", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_location_uses_wire_names() {
        let filter = LocationFilter::default()
            .city_id(3)
            .district_id(10)
            .building_number(3468)
            .post_code(23955)
            .additional_number(7487)
            .city_name("THUWAL")
            .district_name("KAUST")
            .street_name("Prince Sultan");
        let query = QueryParams::new().location(&filter);

        assert_eq!(query.get("cityId"), Some("3"));
        assert_eq!(query.get("districtId"), Some("10"));
        assert_eq!(query.get("buildingnumber"), Some("3468"));
        assert_eq!(query.get("zipcode"), Some("23955"));
        assert_eq!(query.get("additionalnumber"), Some("7487"));
        assert_eq!(query.get("cityname"), Some("THUWAL"));
        assert_eq!(query.get("districtname"), Some("KAUST"));
        assert_eq!(query.get("streetname"), Some("Prince Sultan"));
    }

    #[test]
    fn test_empty_location_adds_nothing() {
        let query = QueryParams::new().location(&LocationFilter::default());
        assert!(query.is_empty());
    }
}
