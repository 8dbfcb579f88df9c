//! Article generation pipeline pieces.
//!
//! - **Request**: what to write about and the overrides for this run
//! - **Prompt**: system instruction and user prompt for the completion service
//! - **Parser**: tolerant conversion of model output into a document
//! - **Document**: the structured article handed to the publisher

pub mod document;
pub mod parser;
pub mod prompt;
mod request;

pub use document::ArticleDocument;
pub use parser::parse;
pub use request::{GenerationRequest, LengthClass};
