use crate::config::types::{HarvestConfig, RetryConfig};
use crate::ConfigError;
use std::path::Path;
use url::Url;

/// Validates a resolved configuration
pub fn validate(config: &HarvestConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;
    validate_retry(&config.retry)?;
    validate_output_path(&config.output_path)?;
    Ok(())
}

/// Validates the forum base URL
fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidBaseUrl(format!(
            "expected http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl(format!(
            "missing host in '{}'",
            url
        )));
    }

    Ok(())
}

/// Validates the retry policy
fn validate_retry(retry: &RetryConfig) -> Result<(), ConfigError> {
    if retry.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "retry max_attempts must be >= 1, got {}",
            retry.max_attempts
        )));
    }

    Ok(())
}

/// Validates the output path
fn validate_output_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
