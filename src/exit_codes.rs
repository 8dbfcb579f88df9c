//! Exit code constants for the quill CLI.
//!
//! - 0: Success
//! - 1: Input or configuration error (missing topic, credential, bad config)
//! - 2: Generation failure (completion service call failed)
//! - 3: Document I/O failure (read/write of the persisted article)
//! - 4: Publish failure (publisher exited non-zero or could not start)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Input or configuration error: missing topic, missing credential, bad config.
pub const INPUT_ERROR: i32 = 1;

/// Generation failure: the completion boundary returned an error.
pub const GENERATION_FAILURE: i32 = 2;

/// Document I/O failure: the article JSON could not be written or read.
pub const IO_FAILURE: i32 = 3;

/// Publish failure: the publisher process failed or reported an error.
pub const PUBLISH_FAILURE: i32 = 4;
