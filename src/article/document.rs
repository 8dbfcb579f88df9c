//! The structured article handed from generation to publishing.

use serde::{Deserialize, Serialize};

/// Tag used when the model output carries no usable tags.
pub const DEFAULT_TAG: &str = "technical-article";

/// A tag as the publishing platform expects it.
///
/// `versions` exists for schema compatibility and is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
        }
    }
}

/// A generated article.
///
/// Field order is the serialized key order: `title`, `body`, `tags`,
/// `private`, `tweet`. Articles are always private and never announced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDocument {
    pub title: String,
    pub body: String,
    pub tags: Vec<Tag>,
    pub private: bool,
    pub tweet: bool,
}

impl ArticleDocument {
    /// Assemble a document under the fixed visibility policy.
    pub fn new(title: String, body: String, tags: Vec<Tag>) -> Self {
        Self {
            title,
            body,
            tags,
            private: true,
            tweet: false,
        }
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Body length in characters (not bytes).
    pub fn body_chars(&self) -> usize {
        self.body.chars().count()
    }
}

/// The title used when the model output has none.
pub fn fallback_title(topic: &str) -> String {
    format!("About {}", topic.trim())
}

/// The tags used when the model output has none.
pub fn fallback_tags(language: Option<&str>) -> Vec<Tag> {
    let mut tags = vec![Tag::new(DEFAULT_TAG)];
    if let Some(language) = language.map(str::trim).filter(|l| !l.is_empty()) {
        tags.push(Tag::new(language));
    }
    tags
}
