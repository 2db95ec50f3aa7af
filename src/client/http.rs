//! HTTP transport setup for National Address requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::{AddressError, Result};

// ============================================================================
// Constants
// ============================================================================

/// How long idle pooled connections are kept, in seconds
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

/// Header carrying the subscription key. The key never goes in the query.
pub const API_KEY_HEADER: &str = "api_key";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout enforced by the transport. `None` leaves requests
    /// unbounded.
    pub timeout: Option<Duration>,
    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            pool_max_idle_per_host: 4,
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }
}

// ============================================================================
// Client Construction
// ============================================================================

/// Build the pooled reqwest client for the given configuration.
///
/// # Errors
///
/// Returns `AddressError::Config` if the TLS backend fails to initialize.
pub fn build_http_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| AddressError::config(format!("failed to build HTTP client: {e}")))
}
