//! Thread-page extraction
//!
//! Turns the rendered HTML of one Discourse thread page into a `PostRecord`.
//! Extraction is a fixed sequence of CSS-selector lookups against the known
//! page template; every field degrades independently to its documented
//! default, so no single malformed element can sink the whole record.

mod post;
mod timestamp;

pub use post::parse_post;
pub use timestamp::parse_timestamp;
