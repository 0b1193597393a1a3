use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Parses the timestamp formats Discourse puts in `post-date` title
/// attributes.
///
/// RFC 3339 first, then RFC 2822, then the bare `YYYY-MM-DD HH:MM:SS`
/// variants (with or without a trailing `UTC`), which are assumed UTC.
/// Returns `None` for anything else; the caller decides what to substitute.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed);
    }

    for format in ["%Y-%m-%d %H:%M:%S UTC", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rfc3339() {
        let parsed = parse_timestamp("2024-06-05T14:31:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-05T14:31:00+00:00");
    }

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-06-05T14:31:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-05T14:31:00+02:00");
    }

    #[test]
    fn test_parses_rfc2822() {
        let parsed = parse_timestamp("Wed, 05 Jun 2024 14:31:00 +0000").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-05T14:31:00+00:00");
    }

    #[test]
    fn test_parses_bare_datetime_as_utc() {
        let parsed = parse_timestamp("2024-06-05 14:31:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-05T14:31:00+00:00");
    }

    #[test]
    fn test_parses_discourse_utc_suffix() {
        let parsed = parse_timestamp("2024-06-05 14:31:00 UTC").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-05T14:31:00+00:00");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_timestamp("3 days ago").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
    }
}
