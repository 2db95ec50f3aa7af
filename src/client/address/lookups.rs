//! Lookup list methods for NationalAddressClient.
//!
//! Lookups are small reference lists without paging. A parent id of `-1`
//! asks for every entry.

use super::NationalAddressClient;
use crate::client::endpoints::Endpoint;
use crate::client::query::QueryParams;
use crate::domain::{City, District, Language, Region, Result, ServiceCategory, ServiceSubCategory};

/// Parent id meaning "no parent filter".
pub const ALL: i64 = -1;

impl NationalAddressClient {
    /// All regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_regions(&self, language: Language) -> Result<Vec<Region>> {
        let query = QueryParams::new().language(language).format().encode();
        self.lookup(Endpoint::Regions, &query).await
    }

    /// Cities in a region, or every city when `region_id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_cities(&self, region_id: Option<i64>, language: Language) -> Result<Vec<City>> {
        let query = Self::child_lookup_query("regionid", region_id, language);
        self.lookup(Endpoint::Cities, &query).await
    }

    /// Districts in a city, or every district when `city_id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_districts(
        &self,
        city_id: Option<i64>,
        language: Language,
    ) -> Result<Vec<District>> {
        let query = Self::child_lookup_query("cityid", city_id, language);
        self.lookup(Endpoint::Districts, &query).await
    }

    /// All service categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_categories(&self, language: Language) -> Result<Vec<ServiceCategory>> {
        let query = QueryParams::new().language(language).format();
        self.lookup(Endpoint::ServiceCategories, &query).await
    }

    /// Sub-categories of a service category, or all of them when
    /// `service_category_id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_subcategories(
        &self,
        service_category_id: Option<i64>,
        language: Language,
    ) -> Result<Vec<ServiceSubCategory>> {
        let query = Self::child_lookup_query("servicecategoryid", service_category_id, language);
        self.lookup(Endpoint::ServiceSubCategories, &query).await
    }

    pub(crate) fn child_lookup_query(
        parent_key: &'static str,
        parent_id: Option<i64>,
        language: Language,
    ) -> QueryParams {
        QueryParams::new()
            .language(language)
            .format()
            .with(parent_key, parent_id.unwrap_or(ALL))
    }
}
