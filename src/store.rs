//! Persisted article documents.
//!
//! The JSON file written here is the only thing that crosses into the
//! publisher process. Schema:
//!
//! ```json
//! {
//!   "title": "...",
//!   "body": "...",
//!   "tags": [{ "name": "...", "versions": [] }],
//!   "private": true,
//!   "tweet": false
//! }
//! ```

use crate::article::ArticleDocument;
use crate::error::{QuillError, Result};
use crate::fs::write_atomic;
use std::path::Path;

/// Serialize `document` as pretty JSON and replace the file at `path`.
pub fn save(document: &ArticleDocument, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document).map_err(|e| {
        QuillError::IoError(format!("failed to serialize article document: {}", e))
    })?;
    json.push('\n');

    write_atomic(path, json.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "article document saved");
    Ok(())
}

/// Read the raw bytes of a persisted document.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        QuillError::IoError(format!(
            "failed to read article document '{}': {}\n\n\
             Fix: generate an article first (omit --publish-only) or pass --output.",
            path.display(),
            e
        ))
    })
}

/// Read and parse a persisted document.
#[cfg(test)]
pub fn load_document(path: &Path) -> Result<ArticleDocument> {
    let bytes = load(path)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        QuillError::IoError(format!(
            "article document '{}' is not valid JSON: {}",
            path.display(),
            e
        ))
    })
}
