//! # CLI Structure and Argument Parsing
//!
//! `slugs` prints every page slug of a content API, one per line or as a JSON
//! array, for a site generator (or a shell script) to consume.
//!
//! ## Configuration Precedence
//!
//! 1. Command-line flags
//! 2. Environment variables, including those from a `.env` file in the
//!    working directory
//! 3. The TOML file given with `--config`
//! 4. Built-in defaults (`per_page = 100`, `timeout = 30s`)
//!
//! ```bash
//! API_BASE_URL=https://cms.example.com API_KEY=secret slugs
//! slugs --config slugs.toml --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slugs_core::FetchConfig;
use slugs_core::config::{ENV_API_KEY, ENV_BASE_URL, ENV_PER_PAGE, ENV_TIMEOUT_SECS};
use std::path::PathBuf;

/// Output format for the slug list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One slug per line
    Text,
    /// A single JSON array
    Json,
}

/// Main CLI structure for the `slugs` command
#[derive(Parser, Clone, Debug)]
#[command(name = "slugs")]
#[command(version)]
#[command(about = "List the page slugs of a content API", long_about = None)]
pub struct Cli {
    /// Base URL of the content API
    #[arg(long, value_name = "URL", env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// API key sent as `X-API-Key`
    #[arg(long, value_name = "KEY", env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Records requested per page
    #[arg(long, value_name = "N", env = ENV_PER_PAGE)]
    pub per_page: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", env = ENV_TIMEOUT_SECS)]
    pub timeout: Option<u64>,

    /// TOML file with `base_url`, `api_key`, `per_page`, `timeout_secs`
    #[arg(long, value_name = "FILE", env = "SLUGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text, env = "SLUGS_FORMAT")]
    pub format: OutputFormat,

    /// Log every page request
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress warnings (only show errors)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the fetch configuration: file first, then flags and environment on top.
    pub fn fetch_config(&self) -> Result<FetchConfig> {
        let mut config = match &self.config {
            Some(path) => FetchConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => FetchConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(api_key) = &self.api_key {
            config.api_key.clone_from(api_key);
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("slugs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_build_config() {
        let cli = parse(&[
            "--base-url",
            "https://cms.example.com",
            "--api-key",
            "secret",
            "--per-page",
            "20",
            "--timeout",
            "5",
        ]);

        let config = cli.fetch_config().unwrap();
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.per_page, 20);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slugs.toml");
        std::fs::write(
            &path,
            "base_url = \"https://file.example.com\"\napi_key = \"from-file\"\nper_page = 50\n",
        )
        .unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--api-key", "from-flag"]);
        let config = cli.fetch_config().unwrap();

        assert_eq!(config.base_url, "https://file.example.com");
        assert_eq!(config.api_key, "from-flag");
        assert_eq!(config.per_page, 50);
    }

    #[test]
    fn test_format_and_verbosity() {
        let cli = parse(&["-f", "json", "-q"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);

        assert!(Cli::try_parse_from(["slugs", "-v", "-q"]).is_err());
    }
}
