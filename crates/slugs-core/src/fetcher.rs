use crate::types::ApiResponse;
use crate::{Error, FetchConfig, Result, SlugSet};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use tracing::{debug, info};
use url::Url;

/// Header carrying the API key on every page request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// What the fetch loop does after a page has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// The page was full, more records may follow.
    Continue,
    /// The API is exhausted: the page was empty or shorter than requested.
    Done,
}

impl PageStep {
    /// Decide from the record count of a page and the requested page size.
    ///
    /// A full page always means another request, so an API whose last page is
    /// exactly full costs one extra, empty, request.
    pub fn after(count: usize, per_page: u32) -> Self {
        let requested = usize::try_from(per_page).unwrap_or(usize::MAX);
        if count == 0 || count < requested {
            Self::Done
        } else {
            Self::Continue
        }
    }
}

/// HTTP client that walks the content-listing endpoint page by page.
///
/// Requests are strictly sequential. Dropping the future returned by
/// [`fetch_all`](Self::fetch_all) cancels the fetch, the configured timeout
/// bounds every single request.
pub struct SlugFetcher {
    client: Client,
    endpoint: Url,
    api_key: HeaderValue,
    per_page: u32,
}

impl SlugFetcher {
    /// Validate `config` and build a fetcher with its own HTTP client.
    ///
    /// Fails before any network activity if the configuration is incomplete.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("slugs/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Client)?;
        Self::with_client(config, client)
    }

    /// Validate `config` and use an existing HTTP client.
    ///
    /// The client's own timeout applies instead of `config.timeout_secs`.
    pub fn with_client(config: &FetchConfig, client: Client) -> Result<Self> {
        let endpoint = config.validate()?;
        let mut api_key = HeaderValue::from_str(config.api_key.trim())
            .map_err(|_| Error::Config("API key contains invalid header characters".into()))?;
        api_key.set_sensitive(true);

        Ok(Self {
            client,
            endpoint,
            api_key,
            per_page: config.per_page,
        })
    }

    /// Number of records requested per page.
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Request and decode a single page (1-based).
    pub async fn fetch_page(&self, page: u32) -> Result<ApiResponse> {
        debug!(page, per_page = self.per_page, "Requesting content page");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("page", page), ("perPage", self.per_page)])
            .header(API_KEY_HEADER, self.api_key.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| Error::Network { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Network { page, source })?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode { page, source })
    }

    /// Collect every slug, in order of first occurrence, until the API is exhausted.
    ///
    /// Any failure discards what was collected so far.
    pub async fn fetch_all(&self) -> Result<SlugSet> {
        let mut slugs = SlugSet::new();
        let mut page = 1;

        loop {
            let response = self.fetch_page(page).await?;
            let count = response.data.len();

            for item in &response.data {
                slugs.insert_raw(item.raw_slug());
            }
            debug!(page, records = count, total = slugs.len(), "Processed content page");

            match PageStep::after(count, self.per_page) {
                PageStep::Done => break,
                PageStep::Continue => page += 1,
            }
        }

        info!(pages = page, slugs = slugs.len(), "Collected page slugs");
        Ok(slugs)
    }
}

/// Fetch all page slugs described by `config`.
///
/// ```rust,no_run
/// use slugs_core::{FetchConfig, fetch_all_slugs};
///
/// # async fn run() -> slugs_core::Result<()> {
/// let config = FetchConfig::from_env()?;
/// for slug in fetch_all_slugs(&config).await? {
///     println!("{slug}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all_slugs(config: &FetchConfig) -> Result<SlugSet> {
    SlugFetcher::new(config)?.fetch_all().await
}
