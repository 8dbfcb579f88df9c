//! Turns free-form model output into an [`ArticleDocument`].
//!
//! The prompt asks for a `TITLE:` line, a `TAGS:` line and a `BODY:` marker,
//! but nothing enforces that. Parsing is a tolerant line scan where every
//! branch has a fallback, so it never fails:
//!
//! 1. Scan lines from the top. The first `TITLE:` line sets the title, the
//!    first `TAGS:` line sets the tags, and the first `BODY:` line ends the
//!    scan. Markers after `BODY:` are never looked at.
//! 2. With a `BODY:` marker the body is every following line, trimmed.
//!    Without one the whole raw text is the body.
//! 3. A missing title becomes `About {topic}`; an empty tag list becomes
//!    `technical-article` plus the language, if any.

use super::document::{ArticleDocument, Tag, fallback_tags, fallback_title};

const TITLE_MARKER: &str = "TITLE:";
const TAGS_MARKER: &str = "TAGS:";
const BODY_MARKER: &str = "BODY:";

/// Parse raw completion text for an article about `topic`.
pub fn parse(raw: &str, topic: &str, language: Option<&str>) -> ArticleDocument {
    let lines: Vec<&str> = raw.trim().lines().collect();

    let mut title: Option<String> = None;
    let mut tags: Option<Vec<Tag>> = None;
    let mut body_start: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
            if title.is_none() {
                title = Some(rest.trim().to_string());
            }
        } else if let Some(rest) = line.strip_prefix(TAGS_MARKER) {
            if tags.is_none() {
                tags = Some(parse_tags(rest));
            }
        } else if line.starts_with(BODY_MARKER) {
            body_start = Some(i + 1);
            break;
        }
    }

    let body = match body_start {
        Some(start) => lines[start..].join("\n").trim().to_string(),
        None => raw.to_string(),
    };

    let title = title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title(topic));
    let tags = tags
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_tags(language));

    ArticleDocument::new(title, body, tags)
}

/// Split a `TAGS:` value into tags, tolerating brackets around the whole
/// list and around each name. Empty pieces are dropped; duplicates are kept.
fn parse_tags(raw: &str) -> Vec<Tag> {
    strip_brackets(raw.trim())
        .split(',')
        .map(|piece| strip_brackets(piece.trim()).trim())
        .filter(|name| !name.is_empty())
        .map(Tag::new)
        .collect()
}

/// Remove one pair of surrounding square brackets, if present.
fn strip_brackets(s: &str) -> &str {
    s.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(s)
}
