//! Error types for National Address client operations.
//!
//! Only configuration and transport failures surface as errors. A response
//! with `success=false` is the service's way of saying "no match" and is
//! mapped to an empty result instead.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for National Address client operations.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The client could not be configured (missing API key, bad base URL,
    /// HTTP backend failed to initialize).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Parse error (HTTP {status}): {message}")]
    Parse {
        /// HTTP status code of the offending response.
        status: u16,
        /// Description of what failed to parse.
        message: String,
    },
}

/// Result alias used by every client operation.
pub type Result<T> = std::result::Result<T, AddressError>;

impl AddressError {
    /// Create a new configuration error with the given message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new parse error for a response with the given status.
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code of the response
    /// * `message` - Description of what failed to parse
    #[must_use]
    pub fn parse(status: u16, message: impl Into<String>) -> Self {
        Self::Parse {
            status,
            message: message.into(),
        }
    }

    /// Returns `true` for errors raised before any request was sent.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Convert to a `color_eyre::Report` for applications built on color-eyre.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_error_display() {
        let config_err = AddressError::config("no api_key was provided");
        assert_eq!(
            config_err.to_string(),
            "Configuration error: no api_key was provided"
        );

        let parse_err = AddressError::parse(502, "expected value at line 1 column 1");
        assert_eq!(
            parse_err.to_string(),
            "Parse error (HTTP 502): expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_parse_error_creation() {
        match AddressError::parse(200, "trailing characters") {
            AddressError::Parse { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "trailing characters");
            }
            _ => panic!("Expected Parse variant"),
        }
    }

    #[test]
    fn test_is_config() {
        assert!(AddressError::config("x").is_config());
        assert!(!AddressError::parse(500, "x").is_config());
    }

    #[test]
    fn test_into_report_keeps_message() {
        let report = AddressError::config("blank key").into_report();
        assert_eq!(report.to_string(), "Configuration error: blank key");
    }
}
