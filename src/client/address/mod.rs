//! National Address API client.
//!
//! `NationalAddressClient` exposes one async method per endpoint. Each call
//! sends exactly one GET and awaits it; there is no retry, caching or
//! request fan-out. Callers that need to respect the service's rate limits
//! must space their own calls.
//!
//! # Example
//!
//! ```ignore
//! use saudi_address::{NationalAddressClient, Language};
//!
//! let client = NationalAddressClient::new(None, "my-api-key")?;
//! let found = client.get_address(26.318922, 50.228043, Language::English).await?;
//! println!("{} match(es)", found.count);
//! ```

use reqwest::Client;
use serde_json::Value;

use super::endpoints::{DEFAULT_BASE_URL, Endpoint};
use super::http::{API_KEY_HEADER, HttpConfig, build_http_client};
use super::query::QueryParams;
use crate::config::ClientConfig;
use crate::domain::json::{count_field, is_success, records_from};
use crate::domain::{Address, AddressError, FromJson, Result, ResultSet};

mod lookups;
mod poi;
mod search;
mod verify;


// ============================================================================
// National Address Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct NationalAddressClient {
    /// Service root, without a trailing slash.
    base_url: String,
    /// Subscription key sent in the `api_key` header.
    api_key: String,
    /// HTTP client for requests.
    client: Client,
}

impl NationalAddressClient {
    /// Creates a client for `base_url` (or the production service when
    /// `None`) authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::Config` if `api_key` is blank, the base URL is
    /// not an http(s) URL, or the HTTP client fails to initialize. No request
    /// is sent.
    pub fn new(base_url: Option<&str>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_http_config(base_url, api_key, &HttpConfig::default())
    }

    /// Creates a client with custom transport settings.
    ///
    /// # Errors
    ///
    /// Same as [`NationalAddressClient::new`].
    pub fn with_http_config(
        base_url: Option<&str>,
        api_key: impl Into<String>,
        http: &HttpConfig,
    ) -> Result<Self> {
        let api_key = Self::validate_api_key(api_key.into())?;
        let base_url = Self::normalize_base_url(base_url)?;
        let client = build_http_client(http)?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::Config` if `api_key` is blank or the base URL
    /// is invalid.
    pub fn with_client(
        client: Client,
        base_url: Option<&str>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            base_url: Self::normalize_base_url(base_url)?,
            api_key: Self::validate_api_key(api_key.into())?,
            client,
        })
    }

    /// Creates a client from a loaded [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`NationalAddressClient::new`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_http_config(
            config.base_url.as_deref(),
            config.api_key.clone(),
            &config.http_config(),
        )
    }

    fn validate_api_key(api_key: String) -> Result<String> {
        if api_key.trim().is_empty() {
            return Err(AddressError::config("no api_key was provided"));
        }
        Ok(api_key)
    }

    fn normalize_base_url(base_url: Option<&str>) -> Result<String> {
        let url = match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/'),
            _ => DEFAULT_BASE_URL,
        };

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AddressError::config(format!(
                "base URL '{url}' must start with http:// or https://"
            )));
        }

        Ok(url.to_string())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn build_request(&self, endpoint: Endpoint, query: &QueryParams) -> reqwest::RequestBuilder {
        self.client
            .get(endpoint.url(&self.base_url))
            .header("accept", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .query(query.as_pairs())
    }

    /// Send one GET and parse the body as JSON.
    ///
    /// The HTTP status is not checked: the service reports failures in-band
    /// through `success`, so any JSON body is returned as-is.
    pub(crate) async fn fetch_json(&self, endpoint: Endpoint, query: &QueryParams) -> Result<Value> {
        let response = self.build_request(endpoint, query).send().await?;
        let status = response.status();
        tracing::debug!("GET {endpoint} returned status {status}");

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("{endpoint} returned a non-JSON body (HTTP {status}): {e}");
            AddressError::parse(status.as_u16(), e.to_string())
        })
    }

    /// Shared flow for every endpoint returning `Addresses`.
    pub(crate) async fn search_addresses(
        &self,
        endpoint: Endpoint,
        query: &QueryParams,
    ) -> Result<ResultSet<Address>> {
        let body = self.fetch_json(endpoint, query).await?;
        Ok(Self::parse_result_set(endpoint, &body))
    }

    /// Shared flow for the lookup endpoints.
    pub(crate) async fn lookup<T: FromJson>(
        &self,
        endpoint: Endpoint,
        query: &QueryParams,
    ) -> Result<Vec<T>> {
        let body = self.fetch_json(endpoint, query).await?;
        Ok(Self::parse_lookup(endpoint, &body))
    }

    #[must_use]
    pub(crate) fn parse_result_set(endpoint: Endpoint, body: &Value) -> ResultSet<Address> {
        if !is_success(body) {
            tracing::debug!("{endpoint} reported no success, returning empty result");
            return ResultSet::empty();
        }

        let records = endpoint
            .records_key()
            .map(|key| records_from(&body[key]))
            .unwrap_or_default();

        ResultSet::new(records, count_field(body, "totalSearchResults"))
    }

    #[must_use]
    pub(crate) fn parse_lookup<T: FromJson>(endpoint: Endpoint, body: &Value) -> Vec<T> {
        if !is_success(body) {
            tracing::debug!("{endpoint} reported no success, returning empty list");
            return Vec::new();
        }

        endpoint
            .records_key()
            .map(|key| records_from(&body[key]))
            .unwrap_or_default()
    }
}
