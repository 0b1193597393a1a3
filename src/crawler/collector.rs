use crate::config::HarvestConfig;
use crate::fetcher::FirecrawlClient;
use crate::url::is_thread_link;
use crate::{HarvestError, Result};
use std::collections::HashSet;

/// Collects thread links from the forum's listing page.
///
/// The scraping service crawls the listing in link-extraction mode with a
/// page-count limit of 1. The aggregated links are filtered to threads under
/// the configured base URL, deduplicated with a set, and sorted
/// lexicographically so downstream ordering (and any `max_posts` truncation)
/// is deterministic across runs.
///
/// A failure here is fatal to the run: without the listing there is nothing
/// to harvest.
pub async fn collect_thread_links(
    client: &FirecrawlClient,
    config: &HarvestConfig,
) -> Result<Vec<String>> {
    tracing::info!("Crawling listing page: {}", config.listing_url);

    let links = client
        .crawl_links(config.listing_url.as_str())
        .await
        .map_err(|source| HarvestError::Fetch {
            url: config.listing_url.to_string(),
            source,
        })?;

    let unique: HashSet<String> = links
        .into_iter()
        .filter(|link| is_thread_link(link, &config.base_url))
        .collect();

    let mut thread_links: Vec<String> = unique.into_iter().collect();
    thread_links.sort();

    tracing::info!("Found {} unique thread links", thread_links.len());
    Ok(thread_links)
}
