//! Connection settings for the content API.
//!
//! A [`FetchConfig`] is built once by the caller at startup and handed to the
//! fetcher explicitly. Nothing in this crate reads the environment behind the
//! caller's back: [`FetchConfig::from_env`] and [`FetchConfig::load`] are
//! conveniences the caller opts into.
//!
//! ## Sources
//!
//! 1. **Code**: [`FetchConfig::new`] plus the `with_*` builders
//! 2. **Environment**: `API_BASE_URL`, `API_KEY`, `SLUGS_PER_PAGE`, `SLUGS_TIMEOUT_SECS`
//! 3. **TOML file**: see [`FetchConfig::load`]
//!
//! ```rust
//! use slugs_core::FetchConfig;
//!
//! let config = FetchConfig::new("https://cms.example.com", "secret").with_per_page(50);
//! let endpoint = config.validate()?;
//! assert_eq!(
//!     endpoint.as_str(),
//!     "https://cms.example.com/api/collections/page/content"
//! );
//! # Ok::<(), slugs_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Page size used when none is configured.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the content-listing endpoint, relative to the base URL.
pub const CONTENT_PATH: &str = "api/collections/page/content";

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "API_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "API_KEY";
/// Environment variable overriding the page size.
pub const ENV_PER_PAGE: &str = "SLUGS_PER_PAGE";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SLUGS_TIMEOUT_SECS";

/// Settings needed to list content pages from the API.
///
/// ## Example Configuration File
///
/// ```toml
/// base_url = "https://cms.example.com"
/// api_key = "secret"
/// per_page = 100
/// timeout_secs = 30
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL of the content API, without the endpoint path.
    pub base_url: String,
    /// Key sent in the `X-API-Key` header.
    pub api_key: String,
    /// Number of records requested per page.
    pub per_page: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Keep the key out of logs.
impl fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("FetchConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &api_key)
            .field("per_page", &self.per_page)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl FetchConfig {
    /// Create a configuration with default page size and timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Override the number of records requested per page.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Override the per-request timeout, rounded up to whole seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        let partial = if timeout.subsec_nanos() > 0 { 1 } else { 0 };
        self.timeout_secs = timeout.as_secs().saturating_add(partial);
        self
    }

    /// Per-request timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a configuration from the process environment.
    ///
    /// Missing `API_BASE_URL` / `API_KEY` are left empty and reported by
    /// [`validate`](Self::validate), so the caller sees a configuration error
    /// rather than a silent default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `SLUGS_PER_PAGE` or `SLUGS_TIMEOUT_SECS`
    /// is set but not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Same rules as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(
            lookup(ENV_BASE_URL).unwrap_or_default(),
            lookup(ENV_API_KEY).unwrap_or_default(),
        );

        if let Some(raw) = lookup(ENV_PER_PAGE) {
            config.per_page = parse_number(ENV_PER_PAGE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }

        Ok(config)
    }

    /// Load a configuration from a TOML file.
    ///
    /// Absent keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Check that the configuration is usable and return the listing endpoint.
    ///
    /// This never touches the network.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the base URL or API key is blank, or the page
    ///   size or timeout is zero
    /// - [`Error::InvalidUrl`] if the base URL is not an absolute http(s) URL
    pub fn validate(&self) -> Result<Url> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::Config(format!("{ENV_BASE_URL} is not set")));
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::Config(format!("{ENV_API_KEY} is not set")));
        }
        if self.per_page == 0 {
            return Err(Error::Config("per_page must be greater than zero".into()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than zero".into()));
        }

        content_endpoint(base_url)
    }
}

fn content_endpoint(base_url: &str) -> Result<Url> {
    let joined = format!("{}/{CONTENT_PATH}", base_url.trim_end_matches('/'));
    let url = Url::parse(&joined).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "{base_url}: expected an http(s) URL with a host, got scheme '{scheme}'"
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} must be a number, got '{raw}'")))
}
