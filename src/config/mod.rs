//! Configuration for a harvest run
//!
//! Configuration is resolved up front from CLI flags plus the process
//! environment (the scraping service credential), into one `HarvestConfig`
//! value that is passed into constructors explicitly. There is no global
//! client or config state anywhere in the crate.

mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, HarvestConfig, RetryConfig};

// Re-export validation entry point
pub use validation::validate;

use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default forum host.
pub const DEFAULT_BASE_URL: &str = "https://forum.cursor.com";

/// Default output document path.
pub const DEFAULT_OUTPUT_FILE: &str = "cursor_forum_latest_posts.json";

/// Default scraping service endpoint.
pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// Log file that mirrors the console output.
pub const LOG_FILE: &str = "crawl_forum.log";

/// Environment variable holding the scraping service credential.
pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";

/// Environment variable overriding the scraping service endpoint.
pub const API_URL_VAR: &str = "FIRECRAWL_API_URL";

/// Resolves CLI flags and environment into a validated `HarvestConfig`.
///
/// The credential is checked here, before any network activity; a missing
/// `FIRECRAWL_API_KEY` aborts the run at startup.
///
/// # Arguments
///
/// * `base_url` - Base URL of the forum to harvest
/// * `output` - Path of the output JSON document
/// * `delay_secs` - Minimum seconds spent per thread request
/// * `max_posts` - Optional cap on the number of threads processed
pub fn load_config(
    base_url: &str,
    output: &Path,
    delay_secs: f64,
    max_posts: Option<usize>,
) -> ConfigResult<HarvestConfig> {
    let api_key = env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    let api_url_raw = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let api_url = Url::parse(&api_url_raw)
        .map_err(|e| ConfigError::InvalidApiUrl(format!("{}: {}", api_url_raw, e)))?;

    let base = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
    let listing_url = base
        .join("/latest")
        .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

    if !delay_secs.is_finite() || delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            delay_secs
        )));
    }

    let config = HarvestConfig {
        base_url: base,
        listing_url,
        output_path: output.to_path_buf(),
        rate_limit_delay: Duration::from_secs_f64(delay_secs),
        max_posts,
        retry: RetryConfig::default(),
        api: ApiConfig { api_key, api_url },
    };

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // Environment mutation is process-global, so the missing/present cases
    // run sequentially inside one test.
    #[test]
    fn test_load_config_env_handling() {
        let output = PathBuf::from("out.json");

        env::remove_var(API_KEY_VAR);
        let err = load_config(DEFAULT_BASE_URL, &output, 1.0, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        env::set_var(API_KEY_VAR, "test-key");
        let config = load_config(DEFAULT_BASE_URL, &output, 0.5, Some(10)).unwrap();
        assert_eq!(config.listing_url.as_str(), "https://forum.cursor.com/latest");
        assert_eq!(config.rate_limit_delay, Duration::from_millis(500));
        assert_eq!(config.max_posts, Some(10));
        assert_eq!(config.api.api_url.as_str(), "https://api.firecrawl.dev/");

        let err = load_config("not a url", &output, 1.0, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));

        let err = load_config(DEFAULT_BASE_URL, &output, -1.0, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = load_config(DEFAULT_BASE_URL, &output, f64::NAN, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
