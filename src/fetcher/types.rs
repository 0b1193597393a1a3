use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for the service's crawl endpoint
#[derive(Debug, Serialize)]
pub(super) struct CrawlRequest<'a> {
    pub url: &'a str,
    /// Page-count limit for the crawl; the listing is a single page
    pub limit: u32,
    #[serde(rename = "scrapeOptions")]
    pub scrape_options: ScrapeOptions<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct ScrapeOptions<'a> {
    pub formats: Vec<&'a str>,
}

/// Request body for the service's scrape endpoint
#[derive(Debug, Serialize)]
pub(super) struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: Vec<&'a str>,
}

/// Response shape of the crawl endpoint: one entry per crawled page
#[derive(Debug, Deserialize)]
pub(super) struct CrawlResponse {
    #[serde(default)]
    pub data: Vec<CrawlPage>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CrawlPage {
    #[serde(default)]
    pub links: Vec<String>,
}

/// Response shape of the scrape endpoint
#[derive(Debug, Deserialize)]
pub(super) struct ScrapeResponse {
    #[serde(default)]
    pub data: ScrapedDocument,
}

/// Every field the service returns is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ScrapedDocument {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// A successfully scraped thread page.
///
/// Unlike the wire type, the HTML is guaranteed present; a response without
/// it is reported as a fetch failure instead.
#[derive(Debug, Clone)]
pub struct FetchedThread {
    pub html: String,
    pub markdown: String,
    pub metadata: Map<String, Value>,
}
