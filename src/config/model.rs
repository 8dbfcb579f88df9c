//! Config struct definition and default implementation.

use super::types::*;
use crate::publish::PublisherConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a quill run.
///
/// This struct represents the contents of `quill.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Completion settings
    // =========================================================================
    /// Model identifier sent to the completion service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Environment variable holding the completion API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Output-token ceiling per completion.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Where the generated article JSON is written and read back for publishing.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    // =========================================================================
    // Publish settings
    // =========================================================================
    /// Environment variable holding the publish access token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// External publisher invocation.
    #[serde(default)]
    pub publisher: PublisherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            output_path: default_output_path(),
            token_env: default_token_env(),
            publisher: PublisherConfig::default(),
        }
    }
}
