//! Serializable client settings.
//!
//! The library never reads files or environment variables itself; this type
//! lets applications keep the client settings in their own config format.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::client::http::HttpConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root; the production endpoint when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Subscription key sent in the `api_key` header.
    pub api_key: String,
    /// Request timeout in seconds. Unset leaves timeouts to the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: None,
            api_key: api_key.into(),
            timeout_secs: None,
        }
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Transport settings derived from this config.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        match self.timeout_secs {
            Some(secs) => HttpConfig::with_timeout(Duration::from_secs(secs)),
            None => HttpConfig::default(),
        }
    }
}
