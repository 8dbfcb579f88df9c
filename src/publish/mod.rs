//! Publishing boundary.
//!
//! Publishing is delegated to an external program that takes a credential
//! and the path of the persisted article JSON. The [`Publisher`] trait is
//! the seam the orchestrator calls; [`CommandPublisher`] runs the configured
//! command line as a subprocess.

mod command;

pub use command::{CommandPublisher, PublisherConfig};

use crate::error::Result;
use std::path::Path;

/// Captured output of a successful publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOutcome {
    pub stdout: String,
    pub stderr: String,
}

/// Something that makes a persisted article visible on the target platform.
pub trait Publisher {
    fn publish(&self, token: &str, document: &Path) -> Result<PublishOutcome>;
}

impl<P: Publisher + ?Sized> Publisher for &P {
    fn publish(&self, token: &str, document: &Path) -> Result<PublishOutcome> {
        (**self).publish(token, document)
    }
}

impl<P: Publisher + ?Sized> Publisher for Box<P> {
    fn publish(&self, token: &str, document: &Path) -> Result<PublishOutcome> {
        (**self).publish(token, document)
    }
}
