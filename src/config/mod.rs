//! Configuration model for quill.
//!
//! This module defines the Config struct that represents `quill.yaml`.
//! Parsing is forward-compatible (unknown fields are ignored), every field
//! has a default, and values are validated after loading.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
