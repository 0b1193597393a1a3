//! Crawl orchestration
//!
//! This module contains the run-level logic:
//! - collecting thread links from the forum listing page
//! - the strictly sequential scrape/parse loop with bounded retry and
//!   per-link pacing
//! - assembling and persisting the final document

mod collector;
mod coordinator;

pub use collector::collect_thread_links;
pub use coordinator::{run_harvest, Coordinator};
