//! HTTP page loader for the Art Institute of Chicago artworks API

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::api::DEFAULT_TOTAL_COUNT;
use crate::api::Page;
use crate::api::PageLoader;
use crate::api::wire;
use crate::error::Error;
use crate::error::FetchError;
use crate::model::ARTWORK_FIELDS;
use crate::model::Artwork;

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

const DEFAULT_USER_AGENT: &str = concat!("gallery-lib/", env!("CARGO_PKG_VERSION"));

/// Page loader backed by the artworks listing endpoint.
///
/// This client is cheap to clone (uses `Arc` internally). Clones share the
/// last known total count.
///
/// # Example
///
/// ```ignore
/// use gallery_lib::ArticClient;
/// use gallery_lib::api::PageLoader;
///
/// let client = ArticClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.load_page(1, 12).await?;
/// println!("{} of {} records", page.len(), page.total_count());
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
    /// Last positive total reported by the server, 0 if none yet.
    last_total: AtomicU64,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the last positive total the server reported, if any.
    pub fn last_known_total(&self) -> Option<u64> {
        match self.inner.last_total.load(Ordering::Relaxed) {
            0 => None,
            total => Some(total),
        }
    }

    /// Builds the listing URL for one page.
    pub fn page_url(&self, page_index: u32, page_size: u32) -> Result<Url, FetchError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .push("artworks");
        url.query_pairs_mut()
            .append_pair("page", &page_index.to_string())
            .append_pair("limit", &page_size.to_string())
            .append_pair("fields", &ARTWORK_FIELDS.join(","));
        Ok(url)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => FetchError::Timeout(timeout),
            _ => FetchError::Network(err),
        }
    }
}

#[async_trait]
impl PageLoader<Artwork> for ArticClient {
    async fn load_page(&self, page_index: u32, page_size: u32) -> Result<Page<Artwork>, FetchError> {
        let url = self.page_url(page_index, page_size)?;
        log::debug!("GET {}", url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::http(status, body));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;

        let Some(listing) = wire::decode_listing::<Artwork>(&body) else {
            let total = self.last_known_total().unwrap_or(DEFAULT_TOTAL_COUNT);
            log::warn!(
                "Malformed listing body for page {}, substituting an empty page",
                page_index
            );
            return Ok(Page::empty(page_index, page_size, total));
        };

        if listing.skipped > 0 {
            log::warn!("Page {}: dropped {} records", page_index, listing.skipped);
        }

        let total = match listing.total {
            Some(total) => {
                self.inner.last_total.store(total, Ordering::Relaxed);
                total
            }
            None => DEFAULT_TOTAL_COUNT,
        };

        Ok(Page::new(page_index, page_size, listing.records, total))
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`ArticClient`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gallery_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .base_url("http://localhost:8080/api/v1")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/v1");
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
    http_client: Option<Client>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If set, `connect_timeout` and `user_agent` are ignored.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    pub fn build(self) -> Result<ArticClient, Error> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::Build(format!("invalid base URL '{}': {}", self.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Build(format!("'{}' cannot be a base URL", self.base_url)));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder().user_agent(self.user_agent);
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(|e| Error::Build(e.to_string()))?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
                last_total: AtomicU64::new(0),
            }),
        })
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
