//! Reading raw corpus text from disk.
//!
//! These helpers sit in front of [`TextData`](super::TextData); the
//! preprocessor itself never touches the filesystem.

use std::path::Path;

use tracing::debug;

use crate::error::TextDataResult;

/// Strip Project Gutenberg header and footer markers.
///
/// Looks for "*** START OF" and "*** END OF" lines and returns only the
/// content between them. Falls back to the full text if markers aren't found.
#[must_use]
pub fn strip_gutenberg_markers(text: &str) -> &str {
    let start = text
        .find("*** START OF")
        .and_then(|pos| text[pos..].find('\n').map(|nl| pos + nl + 1));

    let end = text.find("*** END OF");

    match (start, end) {
        (Some(s), Some(e)) if s < e => &text[s..e],
        (Some(s), None) => &text[s..],
        _ => text,
    }
}

/// Read a corpus file and drop any Gutenberg boilerplate.
///
/// Returns `(name, text)` where `name` is the file stem, suitable as a data
/// identifier.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8.
pub fn read_corpus(path: &Path) -> TextDataResult<(String, String)> {
    let raw = std::fs::read_to_string(path)?;
    let text = strip_gutenberg_markers(&raw).to_string();
    debug!(
        path = %path.display(),
        raw_bytes = raw.len(),
        kept_bytes = text.len(),
        "read corpus"
    );

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus")
        .to_string();

    Ok((name, text))
}
