//! Prompt construction for the completion service.
//!
//! - **Render**: `{name}` placeholder substitution shared with the publisher
//!   command line
//! - **Builder**: system instruction plus the user prompt for one request

mod builder;
pub mod render;

pub use builder::build;
pub use render::{RenderError, render, vars};
