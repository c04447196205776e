//! Error types and handling for slugs-core operations.
//!
//! Every failure aborts a slug fetch as a whole: there is no partial result and
//! no retry inside the core. Errors that happen while talking to the content
//! API carry the page number they occurred on, so callers can tell *which*
//! request failed.
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: missing base URL or API key, invalid limits, bad URLs
//! - **Network Errors**: connection failures and timeouts on a page request
//! - **Status Errors**: the API answered with a non-success status
//! - **Decode Errors**: the response body was not the expected JSON
//! - **I/O and Serialization Errors**: reading a TOML config file
//!
//! ```rust
//! use slugs_core::{Error, FetchConfig};
//!
//! let err = FetchConfig::new("", "secret").validate().unwrap_err();
//! assert!(matches!(err, Error::Config(_)));
//! assert_eq!(err.category(), "config");
//! assert_eq!(err.page(), None);
//! ```

use thiserror::Error;

/// The main error type for slugs-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or out of range.
    ///
    /// Raised before any request is issued, e.g. when the base URL or the API
    /// key is empty, or the page size is zero.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The base URL cannot be turned into an absolute http(s) endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure while requesting or reading a page.
    ///
    /// ## Recoverability
    ///
    /// Connection and timeout errors are typically recoverable by the caller,
    /// the fetch itself never retries.
    #[error("Network error on page {page}: {source}")]
    Network {
        /// Page number that was being requested.
        page: u32,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("API request failed with status {status} on page {page}")]
    Status {
        /// Page number that was being requested.
        page: u32,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The response body is not a valid page of content records.
    #[error("Failed to decode page {page}: {source}")]
    Decode {
        /// Page number whose body failed to decode.
        page: u32,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Page number the error occurred on, for errors raised by a page request.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        match self {
            Self::Network { page, .. } | Self::Status { page, .. } | Self::Decode { page, .. } => {
                Some(*page)
            },
            _ => None,
        }
    }

    /// HTTP status code, when the API answered with a non-success status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error might go away if the caller runs the fetch again.
    ///
    /// Returns `true` for timeouts, connection failures, HTTP 429 and 5xx
    /// responses. Configuration and decode failures are permanent.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier for logging.
    ///
    /// - `"config"` - missing or invalid configuration
    /// - `"invalid_url"` - unusable base URL
    /// - `"client"` - HTTP client construction
    /// - `"network"` - transport failures
    /// - `"status"` - non-success HTTP status
    /// - `"decode"` - malformed response body
    /// - `"io"` - config file access
    /// - `"serialization"` - config file format
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Client(_) => "client",
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_status_error_names_page_and_status() {
        let error = Error::Status {
            page: 2,
            status: 500,
        };

        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("page 2"));
        assert_eq!(error.page(), Some(2));
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.category(), "status");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let error = Error::Decode {
            page: 3,
            source: decode_error(),
        };

        assert_eq!(error.page(), Some(3));
        assert_eq!(error.status(), None);
        assert!(std::error::Error::source(&error).is_some());
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_config_errors_have_no_page() {
        let errors = [
            Error::Config("API_KEY is not set".to_string()),
            Error::InvalidUrl("not a url".to_string()),
            Error::Serialization("bad toml".to_string()),
        ];

        for error in errors {
            assert_eq!(error.page(), None, "{error:?} should not carry a page");
            assert!(!error.is_recoverable());
        }
    }

    #[test]
    fn test_status_recoverability() {
        for status in [429, 500, 502, 503] {
            assert!(Error::Status { page: 1, status }.is_recoverable());
        }
        for status in [400, 401, 403, 404] {
            assert!(!Error::Status { page: 1, status }.is_recoverable());
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let error: Error = io::Error::new(io::ErrorKind::TimedOut, "slow disk").into();
        assert_eq!(error.category(), "io");
        assert!(error.is_recoverable());

        let error: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_error = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let error: Error = parse_error.into();
        match error {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn test_status_error_with_arbitrary_pages(page in 1u32.., status in 400u16..600) {
            let error = Error::Status { page, status };
            let message = error.to_string();

            prop_assert!(message.contains(&page.to_string()));
            prop_assert!(message.contains(&status.to_string()));
            prop_assert_eq!(error.page(), Some(page));
            prop_assert_eq!(error.category(), "status");
        }
    }
}
