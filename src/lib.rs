//! Forum Harvest: a Discourse forum thread snapshotter
//!
//! This crate retrieves the latest discussion threads from a Discourse-style
//! forum and persists them as one structured JSON document. Page fetching and
//! rendering is delegated to a Firecrawl-compatible scraping service; this
//! crate only extracts fields from the rendered HTML and accumulates records.

pub mod config;
pub mod crawler;
pub mod fetcher;
pub mod output;
pub mod parser;
pub mod records;
pub mod url;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error for {url}: {source}")]
    Fetch {
        url: String,
        source: fetcher::FetchError,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FIRECRAWL_API_KEY is not set in the environment")]
    MissingApiKey,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid scraping service URL: {0}")]
    InvalidApiUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::HarvestConfig;
pub use crawler::{run_harvest, Coordinator};
pub use records::{CrawlResult, PostRecord, ReplyRecord};
