//! Error types for the quill CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every error is fatal for the run; nothing is retried.

use crate::exit_codes;
use thiserror::Error;

/// Boxed cause attached to generation failures for diagnostics.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for quill operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// Missing or empty topic, or another bad input from the caller.
    #[error("{0}")]
    InputError(String),

    /// Invalid configuration or a missing credential.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The completion service call failed.
    #[error("Generation failed: {message}")]
    GenerationError {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },

    /// The article document could not be written or read.
    #[error("{0}")]
    IoError(String),

    /// The publisher failed; the message carries its captured output verbatim.
    #[error("Publish failed: {0}")]
    PublishError(String),
}

impl QuillError {
    /// Build a generation error with an underlying cause attached.
    pub fn generation<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        QuillError::GenerationError {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Build a generation error without an underlying cause.
    pub fn generation_msg(message: impl Into<String>) -> Self {
        QuillError::GenerationError {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuillError::InputError(_) => exit_codes::INPUT_ERROR,
            QuillError::ConfigError(_) => exit_codes::INPUT_ERROR,
            QuillError::GenerationError { .. } => exit_codes::GENERATION_FAILURE,
            QuillError::IoError(_) => exit_codes::IO_FAILURE,
            QuillError::PublishError(_) => exit_codes::PUBLISH_FAILURE,
        }
    }
}

/// Result type alias for quill operations.
pub type Result<T> = std::result::Result<T, QuillError>;
