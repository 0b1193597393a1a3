use crate::parser::timestamp::parse_timestamp;
use crate::records::{PostRecord, ReplyRecord, UNKNOWN};
use crate::url::extract_thread_id;
use scraper::{ElementRef, Html, Selector};
use serde_json::Map;

// Selectors for the Discourse thread-page template.
const TITLE: &str = "h1.topic-title";
const AUTHOR: &str = ".topic-meta-data .names .username";
const DATE: &str = ".topic-meta-data .post-date";
const CONTENT: &str = ".topic-body .cooked";
const TAGS: &str = ".discourse-tags .discourse-tag";
const REPLIES: &str = ".topic-post:not(.topic-owner)";
const REPLY_AUTHOR: &str = ".names .username";
const REPLY_DATE: &str = ".post-date";
const REPLY_CONTENT: &str = ".cooked";

/// Parses the rendered HTML of a thread page into a `PostRecord`.
///
/// Pure function of its inputs aside from a warning logged on date-parse
/// failures. Each extraction yields an `Option`, and the documented default
/// is substituted at exactly one point per field; missing or malformed
/// sub-elements never abort the record.
///
/// `markdown_content` and `metadata` are left empty here; the coordinator
/// attaches what the scraping service returned alongside the HTML.
pub fn parse_post(html: &str, source_url: &str) -> PostRecord {
    let document = Html::parse_document(html);

    let title = first_text(document.root_element(), TITLE);
    let author = first_text(document.root_element(), AUTHOR);
    let date = topic_date(&document, source_url);
    let content = first_text(document.root_element(), CONTENT);
    let tags = all_text(&document, TAGS);
    let replies = extract_replies(&document, source_url);

    PostRecord {
        id: extract_thread_id(source_url),
        url: source_url.to_string(),
        title: title.unwrap_or_else(|| UNKNOWN.to_string()),
        author: author.unwrap_or_else(|| UNKNOWN.to_string()),
        date: date.unwrap_or_else(|| UNKNOWN.to_string()),
        content: content.unwrap_or_default(),
        tags,
        replies,
        markdown_content: String::new(),
        metadata: Map::new(),
    }
}

/// Stripped text of the first element matching `css` under `scope`.
fn first_text(scope: ElementRef, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    scope
        .select(&selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Stripped text of every element matching `css`, in document order.
fn all_text(document: &Html, css: &str) -> Vec<String> {
    let selector = match Selector::parse(css) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Concatenated, whitespace-trimmed text content of an element.
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Topic date from the `title` attribute of the post-date element.
///
/// Missing element, missing attribute, and parse failure all yield `None`;
/// only the parse failure is logged, since it means the template carried a
/// value we could not understand.
fn topic_date(document: &Html, source_url: &str) -> Option<String> {
    let selector = Selector::parse(DATE).ok()?;
    let element = document.select(&selector).next()?;
    let raw = element.value().attr("title")?;

    match parse_timestamp(raw) {
        Some(parsed) => Some(parsed.to_rfc3339()),
        None => {
            tracing::warn!("Failed to parse date {:?} for post {}", raw, source_url);
            None
        }
    }
}

/// Maps every non-owner post element to a `ReplyRecord`, in document order.
fn extract_replies(document: &Html, source_url: &str) -> Vec<ReplyRecord> {
    let selector = match Selector::parse(REPLIES) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|reply| ReplyRecord {
            author: first_text(reply, REPLY_AUTHOR).unwrap_or_else(|| UNKNOWN.to_string()),
            date: reply_date(reply, source_url).unwrap_or_else(|| UNKNOWN.to_string()),
            content: first_text(reply, REPLY_CONTENT).unwrap_or_default(),
        })
        .collect()
}

/// Reply date: the `title` attribute, falling back to the element text.
fn reply_date(reply: ElementRef, source_url: &str) -> Option<String> {
    let selector = Selector::parse(REPLY_DATE).ok()?;
    let element = reply.select(&selector).next()?;

    let raw = match element.value().attr("title") {
        Some(attr) => attr.to_string(),
        None => element_text(element),
    };
    if raw.is_empty() {
        return None;
    }

    match parse_timestamp(&raw) {
        Some(parsed) => Some(parsed.to_rfc3339()),
        None => {
            tracing::warn!(
                "Failed to parse reply date {:?} for post {}",
                raw,
                source_url
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE_URL: &str = "https://forum.example.com/t/indexing-stuck/4821";

    const FULL_THREAD: &str = r#"
        <html><body>
        <h1 class="topic-title">Indexing stuck at 99%</h1>
        <div class="topic-meta-data">
            <div class="names"><span class="username">alice</span></div>
            <span class="post-date" title="2024-06-05T14:31:00Z">Jun 5</span>
        </div>
        <div class="topic-body"><div class="cooked">My project never finishes indexing.</div></div>
        <div class="discourse-tags">
            <a class="discourse-tag">bug</a>
            <a class="discourse-tag">indexing</a>
        </div>
        <div class="topic-post topic-owner">
            <div class="names"><span class="username">alice</span></div>
            <span class="post-date" title="2024-06-05T14:31:00Z">Jun 5</span>
            <div class="cooked">My project never finishes indexing.</div>
        </div>
        <div class="topic-post">
            <div class="names"><span class="username">bob</span></div>
            <span class="post-date" title="2024-06-05T15:00:00Z">Jun 5</span>
            <div class="cooked">Try clearing the cache.</div>
        </div>
        <div class="topic-post">
            <div class="names"><span class="username">carol</span></div>
            <span class="post-date">2024-06-05 16:45:00</span>
            <div class="cooked">Same here.</div>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_full_thread_extraction() {
        let record = parse_post(FULL_THREAD, SOURCE_URL);

        assert_eq!(record.id, Some("4821".to_string()));
        assert_eq!(record.url, SOURCE_URL);
        assert_eq!(record.title, "Indexing stuck at 99%");
        assert_eq!(record.author, "alice");
        assert_eq!(record.date, "2024-06-05T14:31:00+00:00");
        assert_eq!(record.content, "My project never finishes indexing.");
        assert_eq!(record.tags, vec!["bug", "indexing"]);
        assert!(record.markdown_content.is_empty());
        assert!(record.metadata.is_empty());
    }

    #[test]
    fn test_replies_in_document_order_excluding_owner() {
        let record = parse_post(FULL_THREAD, SOURCE_URL);

        assert_eq!(record.replies.len(), 2);
        assert_eq!(record.replies[0].author, "bob");
        assert_eq!(record.replies[0].date, "2024-06-05T15:00:00+00:00");
        assert_eq!(record.replies[0].content, "Try clearing the cache.");
        assert_eq!(record.replies[1].author, "carol");
    }

    #[test]
    fn test_reply_date_falls_back_to_element_text() {
        let record = parse_post(FULL_THREAD, SOURCE_URL);

        // carol's post-date has no title attribute; the element text parses
        assert_eq!(record.replies[1].date, "2024-06-05T16:45:00+00:00");
    }

    #[test]
    fn test_missing_elements_yield_defaults() {
        let record = parse_post("<html><body></body></html>", SOURCE_URL);

        assert_eq!(record.title, UNKNOWN);
        assert_eq!(record.author, UNKNOWN);
        assert_eq!(record.date, UNKNOWN);
        assert_eq!(record.content, "");
        assert!(record.tags.is_empty());
        assert!(record.replies.is_empty());
        assert_eq!(record.id, Some("4821".to_string()));
    }

    #[test]
    fn test_unparseable_date_yields_unknown() {
        let html = r#"
            <div class="topic-meta-data">
                <span class="post-date" title="3 days ago">3d</span>
            </div>
        "#;
        let record = parse_post(html, SOURCE_URL);
        assert_eq!(record.date, UNKNOWN);
    }

    #[test]
    fn test_date_element_without_title_attribute() {
        let html = r#"
            <div class="topic-meta-data">
                <span class="post-date">Jun 5</span>
            </div>
        "#;
        let record = parse_post(html, SOURCE_URL);
        assert_eq!(record.date, UNKNOWN);
    }

    #[test]
    fn test_reply_with_empty_fields() {
        let html = r#"<div class="topic-post"></div>"#;
        let record = parse_post(html, SOURCE_URL);

        assert_eq!(record.replies.len(), 1);
        assert_eq!(record.replies[0].author, UNKNOWN);
        assert_eq!(record.replies[0].date, UNKNOWN);
        assert_eq!(record.replies[0].content, "");
    }

    #[test]
    fn test_non_thread_url_has_null_id() {
        let record = parse_post(FULL_THREAD, "https://forum.example.com/about");
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_post(FULL_THREAD, SOURCE_URL);
        let second = parse_post(FULL_THREAD, SOURCE_URL);
        assert_eq!(first, second);
    }
}
