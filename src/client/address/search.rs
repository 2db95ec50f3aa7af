//! Address search methods for NationalAddressClient.

use super::NationalAddressClient;
use crate::client::endpoints::Endpoint;
use crate::client::query::QueryParams;
use crate::domain::{
    Address, AddressKey, FixedSearch, Language, Result, ResultSet, SearchOptions,
    bulk_address_string,
};

impl NationalAddressClient {
    /// Reverse geocode: addresses at a latitude/longitude.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_address(
        &self,
        lat: f64,
        long: f64,
        language: Language,
    ) -> Result<ResultSet<Address>> {
        let query = Self::geocode_query(lat, long, language);
        self.search_addresses(Endpoint::Geocode, &query).await
    }

    /// Look up full details for several short addresses in one call.
    ///
    /// Keys are sent in the given order as `b|p|a;b|p|a`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn bulk_search<I, K>(
        &self,
        addresses: I,
        options: SearchOptions,
    ) -> Result<ResultSet<Address>>
    where
        I: IntoIterator<Item = K>,
        K: Into<AddressKey>,
    {
        let keys: Vec<AddressKey> = addresses.into_iter().map(Into::into).collect();
        let query = Self::bulk_query(&keys, options);
        self.search_addresses(Endpoint::Bulk, &query).await
    }

    /// Find addresses matching any combination of location filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn fixed_search(&self, search: &FixedSearch) -> Result<ResultSet<Address>> {
        let query = Self::fixed_query(search);
        self.search_addresses(Endpoint::FixedParams, &query).await
    }

    /// Find addresses from a free-text description.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn free_text_search(
        &self,
        address: &str,
        options: SearchOptions,
    ) -> Result<ResultSet<Address>> {
        let query = Self::free_text_query(address, options);
        self.search_addresses(Endpoint::FreeText, &query).await
    }

    pub(crate) fn geocode_query(lat: f64, long: f64, language: Language) -> QueryParams {
        QueryParams::new()
            .with("lat", lat)
            .with("long", long)
            .language(language)
            .format()
            .encode()
    }

    pub(crate) fn bulk_query(keys: &[AddressKey], options: SearchOptions) -> QueryParams {
        QueryParams::new()
            .with("addressstring", bulk_address_string(keys))
            .search(options)
    }

    pub(crate) fn fixed_query(search: &FixedSearch) -> QueryParams {
        QueryParams::new()
            .search(search.options)
            .location(&search.location)
    }

    pub(crate) fn free_text_query(address: &str, options: SearchOptions) -> QueryParams {
        QueryParams::new()
            .with("addressstring", address)
            .search(options)
    }
}
