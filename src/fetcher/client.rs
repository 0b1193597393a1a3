use crate::config::ApiConfig;
use crate::fetcher::types::{
    CrawlRequest, CrawlResponse, FetchedThread, ScrapeOptions, ScrapeRequest, ScrapeResponse,
};
use crate::ConfigError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors from the scraping service
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("scraping service returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("no HTML content in scrape response for {url}")]
    EmptyDocument { url: String },
}

impl FetchError {
    /// Transient errors are worth retrying; everything else is permanent.
    ///
    /// | Condition | Classification |
    /// |-----------|----------------|
    /// | Timeout, connection refused | Transient |
    /// | HTTP 429, HTTP 5xx | Transient |
    /// | Response missing HTML | Transient (partial render) |
    /// | Other HTTP errors | Permanent |
    /// | Response decode failure | Permanent |
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport(e) => e.is_timeout() || e.is_connect(),
            FetchError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            FetchError::EmptyDocument { .. } => true,
        }
    }
}

/// HTTP client for the Firecrawl-compatible scraping service
///
/// Holds the bearer credential and resolved endpoints; created once per run
/// from the `ApiConfig` and shared by reference.
pub struct FirecrawlClient {
    http: Client,
    api_key: String,
    crawl_endpoint: Url,
    scrape_endpoint: Url,
}

impl FirecrawlClient {
    /// Builds the client from the resolved service configuration.
    pub fn new(api: &ApiConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        let crawl_endpoint = join_endpoint(&api.api_url, "/v1/crawl")?;
        let scrape_endpoint = join_endpoint(&api.api_url, "/v1/scrape")?;

        Ok(Self {
            http,
            api_key: api.api_key.clone(),
            crawl_endpoint,
            scrape_endpoint,
        })
    }

    /// Crawls `url` in link-listing mode and returns the aggregated links.
    ///
    /// The service renders the page and extracts its links; the page-count
    /// limit is pinned to 1 since the listing is a single page.
    pub async fn crawl_links(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let body = CrawlRequest {
            url,
            limit: 1,
            scrape_options: ScrapeOptions {
                formats: vec!["links"],
            },
        };

        let response = self
            .http
            .post(self.crawl_endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let decoded: CrawlResponse = response.json().await?;
        Ok(decoded
            .data
            .into_iter()
            .flat_map(|page| page.links)
            .collect())
    }

    /// Scrapes one page, requesting both HTML and Markdown renderings.
    ///
    /// A 200 response without HTML is reported as `EmptyDocument`; the
    /// service occasionally returns partial renders, so the caller treats it
    /// as retryable.
    pub async fn scrape_page(&self, url: &str) -> Result<FetchedThread, FetchError> {
        let body = ScrapeRequest {
            url,
            formats: vec!["html", "markdown"],
        };

        let response = self
            .http
            .post(self.scrape_endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let decoded: ScrapeResponse = response.json().await?;
        let document = decoded.data;

        let html = document.html.ok_or_else(|| FetchError::EmptyDocument {
            url: url.to_string(),
        })?;

        Ok(FetchedThread {
            html,
            markdown: document.markdown.unwrap_or_default(),
            metadata: document.metadata,
        })
    }
}

/// Joins a service endpoint path onto the configured base URL.
fn join_endpoint(api_url: &Url, path: &str) -> crate::Result<Url> {
    api_url
        .join(path)
        .map_err(|e| ConfigError::InvalidApiUrl(format!("{}{}: {}", api_url, path, e)).into())
}
