//! Configuration constants and default value functions.

use crate::completion::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE};
use crate::credential::DEFAULT_TOKEN_ENV;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "quill.yaml";

pub fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

pub fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

pub fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

pub fn default_output_path() -> String {
    "generated_article.json".to_string()
}

pub fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}
