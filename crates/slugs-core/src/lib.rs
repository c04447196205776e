//! # slugs-core
//!
//! Collects the slugs of every page in a paginated content API so a static site
//! generator knows which paths to render.
//!
//! ## Architecture
//!
//! - **Configuration**: explicit [`FetchConfig`] built once by the caller
//! - **Fetching**: [`SlugFetcher`] walks `GET {base}/api/collections/page/content`
//!   one page at a time until an empty or short page
//! - **Normalization**: [`normalize_slug`] and the ordered, deduplicated [`SlugSet`]
//! - **Error Handling**: a single [`Error`] type; any failure aborts the whole fetch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slugs_core::{FetchConfig, fetch_all_slugs};
//!
//! # async fn run() -> slugs_core::Result<()> {
//! let config = FetchConfig::new("https://cms.example.com", "secret");
//! let slugs = fetch_all_slugs(&config).await?;
//! println!("{} pages to render", slugs.len());
//! # Ok(())
//! # }
//! ```

/// Connection settings for the content API
pub mod config;
/// Error types and result aliases
pub mod error;
/// Paginated HTTP fetching of page slugs
pub mod fetcher;
/// Slug normalization and deduplication
pub mod normalize;
/// Response types of the content API
pub mod types;

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetcher::{PageStep, SlugFetcher, fetch_all_slugs};
pub use normalize::{SlugSet, normalize_slug};
pub use types::{ApiResponse, ContentItem};
