//! HTTP client for eBay completed-listings searches.

use crate::config::Config;
use crate::error::PricerError;
use crate::isbn::Isbn;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Production marketplace host.
pub const EBAY_BASE_URL: &str = "https://www.ebay.com";

/// Builds the sold + completed listings search URL for an ISBN.
pub fn sold_listings_url(base_url: &str, isbn: &Isbn) -> String {
    format!(
        "{}/sch/i.html?_from=R40&_nkw={}&_sacat=0&_nls=2&_dmd=2&rt=nc&LH_Sold=1&LH_Complete=1",
        base_url,
        urlencoding::encode(isbn.as_str())
    )
}

/// Trait for fetching sold-listing pages - enables mocking for tests.
#[async_trait]
pub trait SoldListingSource: Send + Sync {
    /// Fetches the first page of sold listings for an ISBN as raw HTML.
    async fn fetch_sold(&self, isbn: &Isbn) -> Result<String, PricerError>;

    /// Returns the URL that `fetch_sold` requests.
    fn search_url(&self, isbn: &Isbn) -> String;
}

/// Plain HTTP client: one GET per search, fixed timeout, no retries.
pub struct EbayClient {
    client: Client,
    timeout_secs: u64,
    base_url: Option<String>,
}

impl EbayClient {
    /// Creates a new client with the given configuration.
    pub async fn new(config: &Config) -> Result<Self, PricerError> {
        Self::with_base_url(config, None).await
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub async fn with_base_url(
        config: &Config,
        base_url: Option<String>,
    ) -> Result<Self, PricerError> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            builder = builder.proxy(wreq::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self { client, timeout_secs: config.timeout_secs, base_url })
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(EBAY_BASE_URL)
    }

    async fn get(&self, url: &str) -> Result<String, PricerError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("eBay answered {} for {}", status, url);
            return Err(PricerError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| self.classify(e))
    }

    /// Separates timeouts from other transport failures.
    fn classify(&self, error: wreq::Error) -> PricerError {
        if error.is_timeout() {
            PricerError::Timeout(self.timeout_secs)
        } else {
            PricerError::Request(error)
        }
    }
}

#[async_trait]
impl SoldListingSource for EbayClient {
    async fn fetch_sold(&self, isbn: &Isbn) -> Result<String, PricerError> {
        let url = self.search_url(isbn);

        info!("Fetching sold listings for ISBN {}", isbn);
        self.get(&url).await
    }

    fn search_url(&self, isbn: &Isbn) -> String {
        sold_listings_url(self.base_url(), isbn)
    }
}
