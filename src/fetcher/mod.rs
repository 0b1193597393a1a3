//! Client for the managed scraping service
//!
//! All page fetching and rendering is delegated to a Firecrawl-compatible
//! HTTP API; this module is the only place that talks to it. Two operations
//! are consumed:
//! - a link-listing crawl of the forum index (`crawl_links`)
//! - a single-page scrape returning rendered HTML and Markdown (`scrape_page`)
//!
//! The client is constructed once per run from the resolved configuration;
//! there is no module-level client state.

mod client;
mod types;

pub use client::{FetchError, FirecrawlClient};
pub use types::FetchedThread;
