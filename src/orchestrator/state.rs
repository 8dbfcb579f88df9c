//! Run modes and the stage graph.
//!
//! ```text
//! Full:          AwaitingTopic -> Generating -> Persisted -> Publishing -> Done
//! GenerateOnly:  AwaitingTopic -> Generating -> Persisted -> Done
//! PublishOnly:                                               Publishing -> Done
//! ```
//!
//! The graph is strictly forward: no stage is revisited and the first
//! failure ends the run.

use crate::error::{QuillError, Result};
use std::fmt;

/// Which halves of the pipeline a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Full,
    GenerateOnly,
    PublishOnly,
}

impl RunMode {
    /// Mode selected by the `--generate-only` / `--publish-only` flags.
    pub fn from_flags(generate_only: bool, publish_only: bool) -> Result<Self> {
        match (generate_only, publish_only) {
            (false, false) => Ok(RunMode::Full),
            (true, false) => Ok(RunMode::GenerateOnly),
            (false, true) => Ok(RunMode::PublishOnly),
            (true, true) => Err(QuillError::InputError(
                "--generate-only and --publish-only cannot be combined".to_string(),
            )),
        }
    }

    pub fn generates(self) -> bool {
        !matches!(self, RunMode::PublishOnly)
    }

    pub fn publishes(self) -> bool {
        !matches!(self, RunMode::GenerateOnly)
    }
}

/// A node of the stage graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingTopic,
    Generating,
    Persisted,
    Publishing,
    Done,
}

impl Stage {
    /// First stage a run in `mode` enters.
    pub fn entry(mode: RunMode) -> Stage {
        if mode.generates() {
            Stage::AwaitingTopic
        } else {
            Stage::Publishing
        }
    }

    /// The stage after this one in `mode`, or `None` once done.
    pub fn successor(self, mode: RunMode) -> Option<Stage> {
        match self {
            Stage::AwaitingTopic => Some(Stage::Generating),
            Stage::Generating => Some(Stage::Persisted),
            Stage::Persisted if mode.publishes() => Some(Stage::Publishing),
            Stage::Persisted => Some(Stage::Done),
            Stage::Publishing => Some(Stage::Done),
            Stage::Done => None,
        }
    }

    /// Every stage a successful run in `mode` passes through, in order.
    pub fn path(mode: RunMode) -> Vec<Stage> {
        std::iter::successors(Some(Stage::entry(mode)), |stage| stage.successor(mode)).collect()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitingTopic => "awaiting-topic",
            Stage::Generating => "generating",
            Stage::Persisted => "persisted",
            Stage::Publishing => "publishing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}
