//! Endpoint table for the National Address API.

/// Production root of the National Address service.
pub const DEFAULT_BASE_URL: &str = "https://apina.address.gov.sa";

/// Versioned prefix shared by every endpoint.
pub const API_PREFIX: &str = "/NationalAddress/v3.1";

/// Every endpoint the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Geocode,
    Bulk,
    FixedParams,
    FreeText,
    PoiNearest,
    PoiFixedParams,
    PoiFreeText,
    Verify,
    Regions,
    Cities,
    Districts,
    ServiceCategories,
    ServiceSubCategories,
}

impl Endpoint {
    /// Path below [`API_PREFIX`].
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Geocode => "/Address/address-geocode",
            Self::Bulk => "/Address/address-bulk",
            Self::FixedParams => "/Address/address-fixed-params",
            Self::FreeText => "/Address/address-free-text",
            Self::PoiNearest => "/Address/poi-nearest",
            Self::PoiFixedParams => "/Address/poi-fixed-params",
            Self::PoiFreeText => "/Address/poi-free-text",
            Self::Verify => "/Address/address-verify",
            Self::Regions => "/lookup/regions",
            Self::Cities => "/lookup/cities",
            Self::Districts => "/lookup/districts",
            Self::ServiceCategories => "/lookup/service-categories",
            Self::ServiceSubCategories => "/lookup/services-sub-categories",
        }
    }

    /// Key of the record array in a successful response, if any.
    #[must_use]
    pub const fn records_key(&self) -> Option<&'static str> {
        match self {
            Self::Geocode
            | Self::Bulk
            | Self::FixedParams
            | Self::FreeText
            | Self::PoiNearest
            | Self::PoiFixedParams
            | Self::PoiFreeText => Some("Addresses"),
            Self::Verify => None,
            Self::Regions => Some("Regions"),
            Self::Cities => Some("Cities"),
            Self::Districts => Some("Districts"),
            Self::ServiceCategories => Some("ServiceCategories"),
            Self::ServiceSubCategories => Some("ServiceSubCategories"),
        }
    }

    /// Full URL for this endpoint under `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}{}", base_url, API_PREFIX, self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Endpoint::Geocode, "https://apina.address.gov.sa/NationalAddress/v3.1/Address/address-geocode")]
    #[case(Endpoint::Bulk, "https://apina.address.gov.sa/NationalAddress/v3.1/Address/address-bulk")]
    #[case(Endpoint::PoiFreeText, "https://apina.address.gov.sa/NationalAddress/v3.1/Address/poi-free-text")]
    #[case(Endpoint::ServiceSubCategories, "https://apina.address.gov.sa/NationalAddress/v3.1/lookup/services-sub-categories")]
    fn test_url(#[case] endpoint: Endpoint, #[case] expected: &str) {
        assert_eq!(endpoint.url(DEFAULT_BASE_URL), expected);
    }

    #[rstest]
    #[case(Endpoint::FreeText, Some("Addresses"))]
    #[case(Endpoint::PoiNearest, Some("Addresses"))]
    #[case(Endpoint::Verify, None)]
    #[case(Endpoint::Cities, Some("Cities"))]
    #[case(Endpoint::ServiceCategories, Some("ServiceCategories"))]
    fn test_records_key(#[case] endpoint: Endpoint, #[case] expected: Option<&str>) {
        assert_eq!(endpoint.records_key(), expected);
    }
}
