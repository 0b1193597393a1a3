use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Fully resolved configuration for one harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Base URL of the forum to harvest
    pub base_url: Url,

    /// The forum's listing page, source of the thread links
    pub listing_url: Url,

    /// Path of the output JSON document
    pub output_path: PathBuf,

    /// Minimum wall time spent per thread, measured from the start of that
    /// thread's processing
    pub rate_limit_delay: Duration,

    /// Optional cap on the number of threads processed
    pub max_posts: Option<usize>,

    /// Retry policy for transient scrape failures
    pub retry: RetryConfig,

    /// Scraping service credential and endpoint
    pub api: ApiConfig,
}

/// Scraping service configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer credential for the scraping service
    pub api_key: String,

    /// Service endpoint; overridable via `FIRECRAWL_API_URL`
    pub api_url: Url,
}

/// Retry policy for a single thread scrape
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts per thread, including the first
    pub max_attempts: u32,

    /// Backoff after the n-th failed attempt is `backoff_base << n`
    pub backoff_base: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
        }
    }
}
