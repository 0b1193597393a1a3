use crate::config::HarvestConfig;
use crate::crawler::collector::collect_thread_links;
use crate::fetcher::{FetchedThread, FirecrawlClient};
use crate::output::write_crawl_result;
use crate::parser::parse_post;
use crate::records::{CrawlResult, PostRecord};
use crate::Result;
use chrono::Utc;
use std::time::Instant;

/// Harvest coordinator
///
/// Owns the fetch client and the results accumulator for one run. Execution
/// is strictly sequential: one link is fetched, parsed, and accounted for
/// before the next begins, and the only suspension points are the explicit
/// backoff and pacing sleeps.
pub struct Coordinator {
    config: HarvestConfig,
    client: FirecrawlClient,
}

impl Coordinator {
    /// Creates a coordinator, building the service client from the config.
    pub fn new(config: HarvestConfig) -> Result<Self> {
        let client = FirecrawlClient::new(&config.api)?;
        Ok(Self { config, client })
    }

    /// Runs the harvest: collect links, scrape each with bounded retry and
    /// per-link pacing, and assemble the final document.
    ///
    /// Links whose retries are exhausted are skipped and logged; they leave
    /// no trace in the returned result. Per-link state is just
    /// pending → (succeeded | skipped).
    pub async fn run(&self) -> Result<CrawlResult> {
        let mut links = collect_thread_links(&self.client, &self.config).await?;
        if let Some(cap) = self.config.max_posts {
            links.truncate(cap);
        }

        let total = links.len();
        let mut posts: Vec<PostRecord> = Vec::with_capacity(total);
        let mut skipped = 0usize;

        for (index, link) in links.iter().enumerate() {
            let started = Instant::now();

            match self.scrape_with_retry(link).await {
                Some(record) => {
                    tracing::info!("Processed {}/{}: {} ({})", index + 1, total, record.title, link);
                    posts.push(record);
                }
                None => {
                    skipped += 1;
                    tracing::error!("Skipping {}", link);
                }
            }

            // Pace against the start of this link's processing, so the
            // request rate stays bounded even when scrapes return early.
            let elapsed = started.elapsed();
            if elapsed < self.config.rate_limit_delay {
                tokio::time::sleep(self.config.rate_limit_delay - elapsed).await;
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} of {} links; see log for details", skipped, total);
        }

        Ok(CrawlResult::new(
            self.config.listing_url.to_string(),
            Utc::now().to_rfc3339(),
            posts,
        ))
    }

    /// Scrapes one thread with bounded exponential backoff.
    ///
    /// After a transient failure on 0-based attempt `n`, sleeps
    /// `backoff_base << n` before the next attempt. Permanent failures give
    /// up immediately. Returns `None` when the link could not be scraped;
    /// the caller skips it without aborting the run.
    async fn scrape_with_retry(&self, url: &str) -> Option<PostRecord> {
        let attempts = self.config.retry.max_attempts;

        for attempt in 0..attempts {
            match self.client.scrape_page(url).await {
                Ok(fetched) => return Some(self.build_record(url, fetched)),
                Err(e) if e.is_transient() && attempt + 1 < attempts => {
                    let backoff = self.config.retry.backoff_base * 2u32.pow(attempt);
                    tracing::warn!(
                        "Attempt {}/{} failed for {}: {}; retrying in {:?}",
                        attempt + 1,
                        attempts,
                        url,
                        e,
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => {
                    tracing::error!(
                        "Giving up on {} after attempt {}/{}: {}",
                        url,
                        attempt + 1,
                        attempts,
                        e
                    );
                    return None;
                }
            }
        }

        None
    }

    /// Combines the parsed HTML with the service-provided Markdown and
    /// metadata into the final record.
    fn build_record(&self, url: &str, fetched: FetchedThread) -> PostRecord {
        PostRecord {
            markdown_content: fetched.markdown,
            metadata: fetched.metadata,
            ..parse_post(&fetched.html, url)
        }
    }
}

/// Runs a complete harvest and writes the output document.
///
/// This is the crate's main entry point: collect, scrape, parse, persist.
/// The output write is the only post-startup failure that aborts an
/// otherwise successful run; a crash mid-run produces no output file.
pub async fn run_harvest(config: HarvestConfig) -> Result<CrawlResult> {
    let output_path = config.output_path.clone();

    let coordinator = Coordinator::new(config)?;
    let result = coordinator.run().await?;

    write_crawl_result(&result, &output_path)?;
    Ok(result)
}
