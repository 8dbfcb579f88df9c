//! Topic acquisition.
//!
//! A topic comes from exactly one source, chosen in priority order:
//!
//! 1. `--topic-file`: the file's full contents
//! 2. `--interactive`: standard input until end-of-input
//! 3. the positional argument
//!
//! With none of them given, standard input is read as if `--interactive`
//! had been passed. Each source reports its own error when it yields
//! nothing; topics are trimmed and may span multiple lines.

use crate::error::{QuillError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the topic for this run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicSource {
    File(PathBuf),
    Interactive,
    Argument(String),
}

impl TopicSource {
    /// Pick the source by priority; an empty argument counts as absent.
    pub fn select(file: Option<PathBuf>, interactive: bool, argument: Option<String>) -> Self {
        if let Some(path) = file {
            return TopicSource::File(path);
        }
        if interactive {
            return TopicSource::Interactive;
        }
        match argument {
            Some(topic) if !topic.trim().is_empty() => TopicSource::Argument(topic),
            _ => TopicSource::Interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, TopicSource::Interactive)
    }

    /// Resolve the topic text, reading `stdin` only for the interactive source.
    pub fn read(&self, stdin: &mut dyn Read) -> Result<String> {
        let topic = match self {
            TopicSource::File(path) => read_file(path)?,
            TopicSource::Interactive => read_stdin(stdin)?,
            TopicSource::Argument(topic) => topic.trim().to_string(),
        };

        if topic.is_empty() {
            return Err(QuillError::InputError(self.empty_message()));
        }
        Ok(topic)
    }

    fn empty_message(&self) -> String {
        match self {
            TopicSource::File(path) => format!("topic file '{}' is empty", path.display()),
            TopicSource::Interactive => "no topic was entered".to_string(),
            TopicSource::Argument(_) => "topic argument is empty".to_string(),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            QuillError::InputError(format!("topic file not found: '{}'", path.display()))
        } else {
            QuillError::InputError(format!(
                "failed to read topic file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    tracing::debug!(path = %path.display(), "read topic from file");
    Ok(text.trim().to_string())
}

fn read_stdin(stdin: &mut dyn Read) -> Result<String> {
    let mut text = String::new();
    stdin.read_to_string(&mut text).map_err(|e| {
        QuillError::InputError(format!("failed to read topic from standard input: {}", e))
    })?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_wins_over_everything() {
        let source = TopicSource::select(
            Some(PathBuf::from("topic.txt")),
            true,
            Some("arg".to_string()),
        );
        assert_eq!(source, TopicSource::File(PathBuf::from("topic.txt")));
    }

    #[test]
    fn interactive_wins_over_argument() {
        let source = TopicSource::select(None, true, Some("arg".to_string()));
        assert_eq!(source, TopicSource::Interactive);
    }

    #[test]
    fn argument_is_used_when_alone() {
        let source = TopicSource::select(None, false, Some("Rust traits".to_string()));
        assert_eq!(source, TopicSource::Argument("Rust traits".to_string()));
    }

    #[test]
    fn nothing_configured_falls_back_to_interactive() {
        assert_eq!(TopicSource::select(None, false, None), TopicSource::Interactive);
        assert_eq!(
            TopicSource::select(None, false, Some("  ".to_string())),
            TopicSource::Interactive
        );
    }

    #[test]
    fn reads_and_trims_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("topic.txt");
        std::fs::write(&path, "\n  Line one\nLine two  \n\n").unwrap();

        let topic = TopicSource::File(path).read(&mut std::io::empty()).unwrap();
        assert_eq!(topic, "Line one\nLine two");
    }

    #[test]
    fn missing_file_is_input_error() {
        let dir = TempDir::new().unwrap();
        let err = TopicSource::File(dir.path().join("nope.txt"))
            .read(&mut std::io::empty())
            .unwrap_err();
        assert!(matches!(err, QuillError::InputError(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn empty_file_is_input_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("topic.txt");
        std::fs::write(&path, "   \n").unwrap();

        let err = TopicSource::File(path).read(&mut std::io::empty()).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn reads_multiline_stdin() {
        let mut stdin = "Queues\nand workers\n".as_bytes();
        let topic = TopicSource::Interactive.read(&mut stdin).unwrap();
        assert_eq!(topic, "Queues\nand workers");
    }

    #[test]
    fn empty_stdin_is_input_error() {
        let mut stdin = "\n\n".as_bytes();
        let err = TopicSource::Interactive.read(&mut stdin).unwrap_err();
        assert!(matches!(err, QuillError::InputError(_)));
        assert_eq!(err.to_string(), "no topic was entered");
    }

    #[test]
    fn argument_does_not_touch_stdin() {
        let mut stdin = "should not be read".as_bytes();
        let topic = TopicSource::Argument("Lifetimes".to_string())
            .read(&mut stdin)
            .unwrap();
        assert_eq!(topic, "Lifetimes");
        assert_eq!(stdin, b"should not be read");
    }
}
