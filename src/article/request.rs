//! Generation request and length classes.

use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target length of a generated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LengthClass {
    Short,
    Medium,
    Long,
}

impl LengthClass {
    /// Approximate character-count guidance given to the model.
    pub fn guidance(self) -> &'static str {
        match self {
            LengthClass::Short => "about 1000-1500 characters",
            LengthClass::Medium => "about 2000-3000 characters",
            LengthClass::Long => "about 3500-5000 characters",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthClass::Short => "short",
            LengthClass::Medium => "medium",
            LengthClass::Long => "long",
        }
    }
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the prompt builder needs for one article.
///
/// Built once per run and consumed by [`crate::article::prompt::build`].
/// Overrides, when present, take precedence over the template defaults.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topic: String,
    pub template_id: String,
    pub language: Option<String>,
    pub audience: Option<String>,
    pub length: Option<LengthClass>,
    pub model: String,
}

impl GenerationRequest {
    /// Create a request, rejecting an empty or whitespace-only topic.
    pub fn new(
        topic: impl Into<String>,
        template_id: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(QuillError::InputError(
                "a topic is required to generate an article".to_string(),
            ));
        }

        Ok(Self {
            topic,
            template_id: template_id.into(),
            language: None,
            audience: None,
            length: None,
            model: model.into(),
        })
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn with_audience(mut self, audience: Option<String>) -> Self {
        self.audience = audience.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn with_length(mut self, length: Option<LengthClass>) -> Self {
        self.length = length;
        self
    }
}
