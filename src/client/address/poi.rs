//! Point-of-interest search methods for NationalAddressClient.

use super::NationalAddressClient;
use crate::client::endpoints::Endpoint;
use crate::client::query::QueryParams;
use crate::domain::{Address, NearestPoi, PoiFixedSearch, Result, ResultSet, SearchOptions};

impl NationalAddressClient {
    /// Services closest to a point, within `radius` kilometres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn nearest_poi(&self, search: &NearestPoi) -> Result<ResultSet<Address>> {
        let query = Self::nearest_poi_query(search);
        self.search_addresses(Endpoint::PoiNearest, &query).await
    }

    /// Services matching a query string, narrowed by location and category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn poi_fixed_search(&self, search: &PoiFixedSearch) -> Result<ResultSet<Address>> {
        let query = Self::poi_fixed_query(search);
        self.search_addresses(Endpoint::PoiFixedParams, &query).await
    }

    /// Services matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn poi_free_text_search(
        &self,
        service: &str,
        options: SearchOptions,
    ) -> Result<ResultSet<Address>> {
        let query = Self::poi_free_text_query(service, options);
        self.search_addresses(Endpoint::PoiFreeText, &query).await
    }

    pub(crate) fn nearest_poi_query(search: &NearestPoi) -> QueryParams {
        QueryParams::new()
            .with("lat", search.lat)
            .with("long", search.long)
            .search(search.options)
            .with("radius", search.radius)
    }

    pub(crate) fn poi_fixed_query(search: &PoiFixedSearch) -> QueryParams {
        QueryParams::new()
            .with("servicestring", &search.service)
            .search(search.options)
            .location(&search.location)
            .with_opt("servicecategoryId", search.service_category_id.as_deref())
            .with_opt("servicesubcategoryId", search.service_subcategory_id.as_deref())
            .with_opt("regionid", search.region_id.as_deref())
    }

    pub(crate) fn poi_free_text_query(service: &str, options: SearchOptions) -> QueryParams {
        QueryParams::new()
            .with("servicestring", service)
            .search(options)
    }
}
