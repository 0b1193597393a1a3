use crate::records::CrawlResult;
use crate::Result;
use std::fs;
use std::path::Path;

/// Serializes the result and writes it to `path` in one shot.
///
/// The document is pretty-printed with 2-space indentation; `serde_json`
/// leaves non-ASCII characters unescaped, so the file is plain UTF-8. A
/// failed write is logged and propagated to the caller.
pub fn write_crawl_result(result: &CrawlResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;

    if let Err(e) = fs::write(path, &json) {
        tracing::error!("Failed to write {}: {}", path.display(), e);
        return Err(e.into());
    }

    tracing::info!(
        "Saved {} posts to {}",
        result.posts_count,
        path.display()
    );
    Ok(())
}

/// Reads a previously written crawl document back into memory.
pub fn read_crawl_result(path: &Path) -> Result<CrawlResult> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
