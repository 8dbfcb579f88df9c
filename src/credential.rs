//! Publish credential resolution.

use crate::error::{QuillError, Result};

/// Environment variable consulted when no token is passed explicitly.
pub const DEFAULT_TOKEN_ENV: &str = "QIITA_ACCESS_TOKEN";

/// Resolve the publish credential: explicit value first, then `env_var`.
///
/// Blank values count as absent. Absence is an input error.
pub fn resolve(explicit: Option<&str>, env_var: &str) -> Result<String> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    match std::env::var(env_var) {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(QuillError::InputError(format!(
            "publish access token is not set.\n\n\
             Fix: pass --token or set the {} environment variable.",
            env_var
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VAR: &str = "QUILL_TEST_PUBLISH_TOKEN";

    fn set(value: Option<&str>) {
        // SAFETY: every test touching VAR is #[serial].
        unsafe {
            match value {
                Some(v) => std::env::set_var(VAR, v),
                None => std::env::remove_var(VAR),
            }
        }
    }

    #[test]
    #[serial]
    fn explicit_token_wins() {
        set(Some("from-env"));
        assert_eq!(resolve(Some("from-arg"), VAR).unwrap(), "from-arg");
        set(None);
    }

    #[test]
    #[serial]
    fn falls_back_to_environment() {
        set(Some("from-env"));
        assert_eq!(resolve(None, VAR).unwrap(), "from-env");
        assert_eq!(resolve(Some("  "), VAR).unwrap(), "from-env");
        set(None);
    }

    #[test]
    #[serial]
    fn missing_everywhere_is_input_error() {
        set(None);
        let err = resolve(None, VAR).unwrap_err();
        assert!(matches!(err, QuillError::InputError(_)));
        assert!(err.to_string().contains(VAR));
    }

    #[test]
    #[serial]
    fn blank_environment_value_is_absent() {
        set(Some("   "));
        assert!(resolve(None, VAR).is_err());
        set(None);
    }
}
