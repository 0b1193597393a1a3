//! Output module for the final crawl document
//!
//! This module handles:
//! - Serializing the `CrawlResult` to its JSON file
//! - Reading a previously written document back
//! - The end-of-run console summary

mod json;

pub use json::{read_crawl_result, write_crawl_result};

use crate::records::CrawlResult;
use std::path::Path;

/// Prints the end-of-run summary to stdout.
///
/// Skipped links are deliberately absent here; per the output contract they
/// are visible only in the logs, never in the persisted document.
pub fn print_summary(result: &CrawlResult, output_path: &Path) {
    println!("=== Harvest Complete ===\n");

    println!("Forum:      {}", result.forum_name);
    println!("Source:     {}", result.source_url);
    println!("Crawled at: {}", result.crawl_date);
    println!("Posts:      {}", result.posts_count);
    println!("Output:     {}", output_path.display());
}
