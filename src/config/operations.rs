//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{QuillError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QuillError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config the CLI asked for.
    ///
    /// An explicit path must exist. Without one, `default_path` is used if
    /// present and built-in defaults otherwise.
    pub fn load_or_default(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if default_path.is_file() => Self::load(default_path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| QuillError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            QuillError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model`, `api_base_url`, `api_key_env`, `token_env`, `output_path` and
    ///   `publisher.command` must be non-empty
    /// - `temperature` must be within 0.0..=2.0
    /// - `max_output_tokens` must be positive
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("model", &self.model),
            ("api_base_url", &self.api_base_url),
            ("api_key_env", &self.api_key_env),
            ("token_env", &self.token_env),
            ("output_path", &self.output_path),
            ("publisher.command", &self.publisher.command),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(QuillError::ConfigError(format!(
                    "config validation failed: {} must not be empty",
                    name
                )));
            }
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(QuillError::ConfigError(format!(
                "config validation failed: temperature must be between 0.0 and 2.0 (found {})",
                self.temperature
            )));
        }

        if self.max_output_tokens == 0 {
            return Err(QuillError::ConfigError(
                "config validation failed: max_output_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Output path resolved against `base` when relative.
    pub fn output_path_in(&self, base: &Path) -> PathBuf {
        let path = Path::new(&self.output_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}
