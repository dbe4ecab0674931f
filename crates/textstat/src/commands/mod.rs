//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use textstat_core::markdown;

pub mod grade;
pub mod info;
pub mod score;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Whether `path` should be scored as markdown.
///
/// Files ending in `.md` always are; anything else only on request.
pub fn is_markdown(path: &Utf8Path, requested: bool) -> bool {
    requested || path.extension() == Some("md")
}

/// Read `path` and reduce it to the prose that gets scored.
pub fn read_prose(
    path: &Utf8Path,
    markdown_requested: bool,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    Ok(if is_markdown(path, markdown_requested) {
        markdown::strip_to_prose(&content)
    } else {
        content
    })
}
