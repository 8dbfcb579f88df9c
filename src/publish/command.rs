//! Subprocess publisher.
//!
//! The command line is a template split with shell-word rules first, then
//! each word is rendered, so a document path containing spaces stays one
//! argument. Placeholders:
//!
//! - `{token}` - the publish credential
//! - `{document}` - absolute or relative path to the article JSON
//!
//! The process runs to completion with stdout and stderr captured. There is
//! no timeout.

use super::{PublishOutcome, Publisher};
use crate::article::prompt::{RenderError, render, vars};
use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

/// Default publisher invocation.
pub const DEFAULT_PUBLISH_COMMAND: &str = "./publish_to_qiita.sh {token} {document}";

/// How to invoke the external publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Command template.
    pub command: String,

    /// Extra environment variables for the publisher process.
    pub environment: BTreeMap<String, String>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_PUBLISH_COMMAND.to_string(),
            environment: BTreeMap::new(),
        }
    }
}

/// Runs [`PublisherConfig::command`] as a child process.
#[derive(Debug, Clone)]
pub struct CommandPublisher {
    config: PublisherConfig,
}

impl CommandPublisher {
    pub fn new(config: PublisherConfig) -> Self {
        Self { config }
    }

    /// Split and render the command line into argv.
    fn argv(&self, token: &str, document: &Path) -> Result<Vec<String>> {
        let words = shell_words::split(&self.config.command).map_err(|e| {
            QuillError::ConfigError(format!(
                "failed to parse publisher command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.config.command, e
            ))
        })?;

        if words.is_empty() {
            return Err(QuillError::ConfigError(
                "publisher command is empty".to_string(),
            ));
        }

        let values = vars([
            ("token", token.to_string()),
            ("document", document.to_string_lossy().into_owned()),
        ]);

        words
            .iter()
            .map(|word| render(word, &values).map_err(|e| self.template_error(e)))
            .collect()
    }

    fn template_error(&self, err: RenderError) -> QuillError {
        let detail = match err {
            RenderError::Undefined { name, .. } => format!(
                "references undefined placeholder '{}' (available: document, token)",
                name
            ),
            other => other.to_string(),
        };
        QuillError::ConfigError(format!(
            "publisher command '{}' {}",
            self.config.command, detail
        ))
    }
}

impl Publisher for CommandPublisher {
    fn publish(&self, token: &str, document: &Path) -> Result<PublishOutcome> {
        let argv = self.argv(token, document)?;
        let (program, args) = (&argv[0], &argv[1..]);

        // argv carries the credential; only the program name is logged.
        tracing::info!(program = %program, document = %document.display(), "invoking publisher");

        let output = Command::new(program)
            .args(args)
            .envs(&self.config.environment)
            .output()
            .map_err(|e| {
                QuillError::PublishError(format!(
                    "failed to execute publisher '{}': {}\n\
                     Fix: ensure the command exists and is executable.",
                    program, e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::warn!(code = ?output.status.code(), "publisher failed");
            return Err(QuillError::PublishError(failure_report(
                output.status.code(),
                &stdout,
                &stderr,
            )));
        }

        Ok(PublishOutcome { stdout, stderr })
    }
}

/// Exit status followed by the publisher's own output, unmodified.
fn failure_report(code: Option<i32>, stdout: &str, stderr: &str) -> String {
    let mut report = match code {
        Some(code) => format!("publisher exited with status {}", code),
        None => "publisher was terminated by a signal".to_string(),
    };
    for stream in [stdout, stderr] {
        if !stream.is_empty() {
            report.push('\n');
            report.push_str(stream);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn publisher(command: &str) -> CommandPublisher {
        CommandPublisher::new(PublisherConfig {
            command: command.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn argv_substitutes_token_and_document() {
        let p = publisher("./publish.sh {token} {document}");
        let argv = p.argv("tok-123", Path::new("out/article.json")).unwrap();
        assert_eq!(argv, vec!["./publish.sh", "tok-123", "out/article.json"]);
    }

    #[test]
    fn argv_keeps_paths_with_spaces_together() {
        let p = publisher("publish --file {document}");
        let argv = p.argv("t", Path::new("/tmp/my articles/a.json")).unwrap();
        assert_eq!(argv, vec!["publish", "--file", "/tmp/my articles/a.json"]);
    }

    #[test]
    fn argv_rejects_unknown_placeholder() {
        let err = publisher("publish {secret}").argv("t", Path::new("a.json")).unwrap_err();
        assert!(matches!(err, QuillError::ConfigError(_)));
        assert!(err.to_string().contains("'secret'"));
    }

    #[test]
    fn argv_rejects_unbalanced_quotes() {
        let err = publisher("publish \"{token}").argv("t", Path::new("a.json")).unwrap_err();
        assert!(err.to_string().contains("failed to parse publisher command"));
    }

    #[test]
    fn argv_rejects_empty_command() {
        let err = publisher("   ").argv("t", Path::new("a.json")).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn failure_report_keeps_output_verbatim() {
        let report = failure_report(Some(2), "posting...\n", "401 Unauthorized\n");
        assert_eq!(
            report,
            "publisher exited with status 2\nposting...\n\n401 Unauthorized\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn successful_publish_captures_stdout() {
        let p = publisher("sh -c 'echo published $1 with $0' {token} {document}");
        let outcome = p.publish("tok", Path::new("a.json")).unwrap();
        assert_eq!(outcome.stdout.trim(), "published a.json with tok");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_publish_error_with_output() {
        let p = publisher("sh -c 'echo stdout-line; echo stderr-line >&2; exit 3'");
        let err = p.publish("tok", Path::new("a.json")).unwrap_err();

        assert!(matches!(err, QuillError::PublishError(_)));
        let message = err.to_string();
        assert!(message.contains("status 3"));
        assert!(message.contains("stdout-line"));
        assert!(message.contains("stderr-line"));
    }

    #[cfg(unix)]
    #[test]
    fn environment_is_passed_to_publisher() {
        let mut config = PublisherConfig {
            command: "sh -c 'echo $QUILL_PUBLISH_TARGET'".to_string(),
            ..Default::default()
        };
        config
            .environment
            .insert("QUILL_PUBLISH_TARGET".to_string(), "staging".to_string());

        let outcome = CommandPublisher::new(config)
            .publish("tok", Path::new("a.json"))
            .unwrap();
        assert_eq!(outcome.stdout.trim(), "staging");
    }

    #[cfg(unix)]
    #[test]
    fn publisher_reads_the_document() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("article.json");
        std::fs::write(&doc, r#"{"title":"T"}"#).unwrap();

        let outcome = publisher("cat {document}").publish("tok", &doc).unwrap();
        assert_eq!(outcome.stdout, r#"{"title":"T"}"#);
    }

    #[test]
    fn missing_program_is_publish_error() {
        let err = publisher("quill_nonexistent_publisher_xyz {document}")
            .publish("tok", Path::new("a.json"))
            .unwrap_err();
        assert!(matches!(err, QuillError::PublishError(_)));
        assert!(err.to_string().contains("failed to execute publisher"));
    }
}
