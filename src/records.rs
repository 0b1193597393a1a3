//! Serialized data model for the harvest output
//!
//! These structs are the wire format of the output document. Everything is
//! created once during a run and never mutated afterwards; nothing persists
//! between runs except the written file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel recorded when an optional field cannot be extracted.
///
/// The `date` fields carry either an RFC 3339 timestamp or this literal; the
/// mixed type is kept deliberately to preserve the persisted schema.
pub const UNKNOWN: &str = "Unknown";

/// Forum name recorded in the output document.
pub const FORUM_NAME: &str = "Cursor Forum";

/// One forum thread: the original post plus its replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Numeric thread id from the URL path; null when the URL has no `/t/` segment
    pub id: Option<String>,
    pub url: String,
    pub title: String,
    pub author: String,
    /// RFC 3339 timestamp, or `"Unknown"` when missing or unparseable
    pub date: String,
    /// Stripped plain text of the topic body; empty when absent
    pub content: String,
    /// Thread tags in document order
    pub tags: Vec<String>,
    /// Replies in document order, oldest first
    pub replies: Vec<ReplyRecord>,
    /// Markdown rendering of the page, as returned by the scraping service
    pub markdown_content: String,
    /// Opaque metadata passthrough from the scraping service
    pub metadata: Map<String, Value>,
}

/// One reply within a thread. Replies carry no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRecord {
    pub author: String,
    pub date: String,
    pub content: String,
}

/// The complete output document for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlResult {
    pub forum_name: String,
    /// The listing URL the thread links were collected from
    pub source_url: String,
    /// RFC 3339 timestamp of the run
    pub crawl_date: String,
    pub posts_count: usize,
    pub posts: Vec<PostRecord>,
}

impl CrawlResult {
    /// Assembles the final document from the accumulated records.
    ///
    /// `posts_count` is computed from the final vector here, so it always
    /// equals `posts.len()` at serialization time.
    pub fn new(source_url: String, crawl_date: String, posts: Vec<PostRecord>) -> Self {
        Self {
            forum_name: FORUM_NAME.to_string(),
            source_url,
            crawl_date,
            posts_count: posts.len(),
            posts,
        }
    }
}
