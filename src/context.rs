//! Working-directory context for a quill run.
//!
//! Resolves the paths a run touches (config file, `.env`, output document)
//! against the directory quill was invoked from, so the rest of the code
//! never consults the process working directory directly.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{QuillError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the dotenv file loaded before the environment is read.
pub const ENV_FILE: &str = ".env";

/// Resolved paths for one run. All paths are absolute when resolved from
/// the current directory.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory quill was invoked from.
    pub working_dir: PathBuf,

    /// Config file used when `--config` is not given.
    pub default_config_path: PathBuf,

    /// Dotenv file consulted at startup.
    pub env_file: PathBuf,
}

impl RunContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            QuillError::InputError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(dir: P) -> Self {
        let working_dir = dir.as_ref().to_path_buf();
        Self {
            default_config_path: working_dir.join(DEFAULT_CONFIG_FILE),
            env_file: working_dir.join(ENV_FILE),
            working_dir,
        }
    }

    /// Load `.env` into the process environment if it exists.
    ///
    /// Variables already set in the environment are not overridden.
    /// Returns whether a file was loaded.
    pub fn load_env_file(&self) -> bool {
        match dotenvy::from_path(&self.env_file) {
            Ok(()) => {
                tracing::debug!(path = %self.env_file.display(), "loaded environment file");
                true
            }
            Err(e) if e.not_found() => false,
            Err(e) => {
                tracing::warn!(path = %self.env_file.display(), error = %e, "ignoring unreadable environment file");
                false
            }
        }
    }

    /// Load the config, honouring an explicit `--config` path.
    pub fn load_config(&self, explicit: Option<&Path>) -> Result<Config> {
        let explicit = explicit.map(|p| self.absolutize(p));
        Config::load_or_default(explicit.as_deref(), &self.default_config_path)
    }

    /// Where the article document lives: `--output` if given, else config.
    pub fn document_path(&self, config: &Config, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => self.absolutize(path),
            None => config.output_path_in(&self.working_dir),
        }
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn paths_hang_off_working_dir() {
        let ctx = RunContext::resolve_from("/work");
        assert_eq!(ctx.default_config_path, Path::new("/work/quill.yaml"));
        assert_eq!(ctx.env_file, Path::new("/work/.env"));
    }

    #[test]
    fn document_path_prefers_override() {
        let ctx = RunContext::resolve_from("/work");
        let config = Config::default();

        assert_eq!(
            ctx.document_path(&config, None),
            Path::new("/work/generated_article.json")
        );
        assert_eq!(
            ctx.document_path(&config, Some(Path::new("out/a.json"))),
            Path::new("/work/out/a.json")
        );
        assert_eq!(
            ctx.document_path(&config, Some(Path::new("/abs/a.json"))),
            Path::new("/abs/a.json")
        );
    }

    #[test]
    fn load_config_reads_relative_explicit_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("custom.yaml"), "model: gpt-4o\n").unwrap();
        let ctx = RunContext::resolve_from(dir.path());

        let config = ctx.load_config(Some(Path::new("custom.yaml"))).unwrap();
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn load_config_defaults_when_nothing_exists() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::resolve_from(dir.path());
        assert_eq!(ctx.load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(!RunContext::resolve_from(dir.path()).load_env_file());
    }

    #[test]
    #[serial]
    fn env_file_populates_environment() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), "QUILL_TEST_DOTENV_VALUE=loaded\n").unwrap();
        // SAFETY: serialized with other env-mutating tests.
        unsafe { env::remove_var("QUILL_TEST_DOTENV_VALUE") };

        assert!(RunContext::resolve_from(dir.path()).load_env_file());
        assert_eq!(env::var("QUILL_TEST_DOTENV_VALUE").unwrap(), "loaded");

        unsafe { env::remove_var("QUILL_TEST_DOTENV_VALUE") };
    }
}
