//! Address verification for NationalAddressClient.

use serde_json::Value;

use super::NationalAddressClient;
use crate::client::endpoints::Endpoint;
use crate::client::query::QueryParams;
use crate::domain::json::is_success;
use crate::domain::{AddressKey, Result, SearchOptions};

impl NationalAddressClient {
    /// Check whether a short address exists.
    ///
    /// Returns `Some(found)` when the service answers, and `None` when it
    /// reports no success. `None` is not the same as `Some(false)`: the
    /// service did not say the address is missing, it did not answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn verify_address(
        &self,
        address: impl Into<AddressKey>,
        options: SearchOptions,
    ) -> Result<Option<bool>> {
        let query = Self::verify_query(&address.into(), options);
        let body = self.fetch_json(Endpoint::Verify, &query).await?;
        Ok(Self::parse_verification(&body))
    }

    pub(crate) fn verify_query(address: &AddressKey, options: SearchOptions) -> QueryParams {
        QueryParams::new()
            .with("buildingnumber", &address.building_number)
            .with("zipcode", &address.post_code)
            .with("additionalnumber", &address.additional_number)
            .search(options)
    }

    #[must_use]
    pub(crate) fn parse_verification(body: &Value) -> Option<bool> {
        if !is_success(body) {
            tracing::debug!("address verification reported no success");
            return None;
        }
        body.get("addressfound").and_then(Value::as_bool)
    }
}
