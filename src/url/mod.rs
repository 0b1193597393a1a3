//! URL helpers for thread links
//!
//! Thread identity and thread-link filtering both key off the Discourse
//! `/t/<slug>/<id>` path convention.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Matches the numeric id in a `/t/<slug>/<id>` thread path.
fn thread_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/t/[^/]+/(\d+)").expect("thread id pattern is valid"))
}

/// Extracts the numeric thread id from a thread URL.
///
/// The id is derived from the URL alone and never re-validated against
/// fetched content.
///
/// # Examples
///
/// ```
/// use forum_harvest::url::extract_thread_id;
///
/// assert_eq!(
///     extract_thread_id("https://forum.example.com/t/some-slug/4821"),
///     Some("4821".to_string())
/// );
/// assert_eq!(extract_thread_id("https://forum.example.com/about"), None);
/// ```
pub fn extract_thread_id(url: &str) -> Option<String> {
    thread_id_pattern()
        .captures(url)
        .map(|captures| captures[1].to_string())
}

/// Returns true when `link` points at a thread under `base_url`.
///
/// The listing page links to assorted forum chrome besides threads; only
/// links that carry the `/t/` thread-path marker, are not the listing page
/// itself, and live under the configured base are kept.
pub fn is_thread_link(link: &str, base_url: &Url) -> bool {
    link.contains("/t/")
        && !link.ends_with("/latest")
        && link.starts_with(base_url.as_str().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://forum.example.com").unwrap()
    }

    #[test]
    fn test_extract_thread_id() {
        assert_eq!(
            extract_thread_id("https://forum.example.com/t/some-slug/4821"),
            Some("4821".to_string())
        );
    }

    #[test]
    fn test_extract_thread_id_with_post_number() {
        assert_eq!(
            extract_thread_id("https://forum.example.com/t/some-slug/4821/3"),
            Some("4821".to_string())
        );
    }

    #[test]
    fn test_extract_thread_id_non_thread_url() {
        assert_eq!(extract_thread_id("https://forum.example.com/about"), None);
        assert_eq!(extract_thread_id("https://forum.example.com/t/no-id/"), None);
    }

    #[test]
    fn test_accepts_thread_link() {
        assert!(is_thread_link(
            "https://forum.example.com/t/some-slug/4821",
            &base_url()
        ));
    }

    #[test]
    fn test_rejects_listing_page() {
        assert!(!is_thread_link(
            "https://forum.example.com/latest",
            &base_url()
        ));
    }

    #[test]
    fn test_rejects_foreign_host() {
        assert!(!is_thread_link(
            "https://other.example.com/t/some-slug/4821",
            &base_url()
        ));
    }

    #[test]
    fn test_rejects_non_thread_path() {
        assert!(!is_thread_link("https://forum.example.com/tos", &base_url()));
    }
}
