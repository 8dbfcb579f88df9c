//! Completion service boundary.
//!
//! The pipeline only needs one operation from a language model: send a
//! system instruction and a user prompt, get text back. [`CompletionClient`]
//! is that seam; [`OpenAiClient`] implements it over HTTP and tests swap in
//! fakes.
//!
//! Every failure (missing API key, network, quota, malformed response)
//! surfaces as a single `GenerationError`, with the cause attached when
//! there is one. A missing key is reported before any request. Nothing is
//! retried.

mod openai;

pub use openai::OpenAiClient;

use crate::error::Result;

/// Sampling temperature used for article generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Output-token ceiling, sized for the longest length class.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;

/// One completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub user: &'a str,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// Something that turns a prompt into raw model text.
pub trait CompletionClient {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        (**self).complete(request)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        (**self).complete(request)
    }
}
