//! Run orchestration.
//!
//! Drives one run through the stage graph in [`state`]:
//!
//! 1. **AwaitingTopic**: resolve the topic from its source
//! 2. **Generating**: prompt, completion call, parse, save the document
//! 3. **Persisted**: the document is on disk; generate-only runs stop here
//! 4. **Publishing**: resolve the credential, check the document, run the publisher
//!
//! Any error ends the run immediately. A document is only written after a
//! successful completion call, and the publisher is only invoked once a
//! credential and a readable document are both in hand.

mod state;


pub use state::{RunMode, Stage};

use crate::article::{GenerationRequest, LengthClass, parse, prompt};
use crate::catalog::TemplateCatalog;
use crate::completion::{CompletionClient, CompletionRequest};
use crate::credential;
use crate::error::{QuillError, Result};
use crate::publish::{PublishOutcome, Publisher};
use crate::store;
use crate::topic::TopicSource;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything a run needs to know, resolved from CLI and config.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub mode: RunMode,
    pub topic: TopicSource,
    pub template_id: String,
    pub language: Option<String>,
    pub audience: Option<String>,
    pub length: Option<LengthClass>,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub document_path: PathBuf,
    /// Token passed on the command line; takes precedence over `token_env`.
    pub token: Option<String>,
    pub token_env: String,
}

/// What a generation produced, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArticle {
    pub title: String,
    pub tags: Vec<String>,
    pub body_chars: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub visited: Vec<Stage>,
    pub document_path: PathBuf,
    pub generated: Option<GeneratedArticle>,
    pub published: Option<PublishOutcome>,
}

/// Sequences generation and publication for one run.
pub struct Orchestrator<'a, C, P> {
    catalog: &'a TemplateCatalog,
    client: C,
    publisher: P,
    stdin: Box<dyn Read + 'a>,
}

impl<'a, C, P> Orchestrator<'a, C, P>
where
    C: CompletionClient,
    P: Publisher,
{
    pub fn new(catalog: &'a TemplateCatalog, client: C, publisher: P) -> Self {
        Self {
            catalog,
            client,
            publisher,
            stdin: Box::new(std::io::stdin()),
        }
    }

    /// Read interactive topics from `input` instead of standard input.
    #[cfg(test)]
    pub fn with_input(mut self, input: impl Read + 'a) -> Self {
        self.stdin = Box::new(input);
        self
    }

    /// Run `plan` to completion or to its first failure.
    pub fn run(&mut self, plan: &RunPlan) -> Result<RunReport> {
        let mut report = RunReport {
            visited: Vec::new(),
            document_path: plan.document_path.clone(),
            generated: None,
            published: None,
        };
        let mut topic: Option<String> = None;
        let mut stage = Stage::entry(plan.mode);
        debug!(stages = ?Stage::path(plan.mode), "run planned");

        loop {
            info!(stage = %stage, mode = ?plan.mode, "entering stage");
            report.visited.push(stage);

            match stage {
                Stage::AwaitingTopic => {
                    topic = Some(plan.topic.read(self.stdin.as_mut())?);
                }
                Stage::Generating => {
                    let topic = topic.take().ok_or_else(|| {
                        QuillError::InputError(
                            "a topic is required to generate an article".to_string(),
                        )
                    })?;
                    report.generated = Some(self.generate(plan, topic)?);
                }
                Stage::Persisted => {
                    info!(path = %plan.document_path.display(), "article document persisted");
                }
                Stage::Publishing => {
                    report.published = Some(self.publish(plan)?);
                }
                Stage::Done => {}
            }

            match stage.successor(plan.mode) {
                Some(next) => stage = next,
                None => return Ok(report),
            }
        }
    }

    /// Prompt, complete, parse and persist.
    fn generate(&self, plan: &RunPlan, topic: String) -> Result<GeneratedArticle> {
        let request = GenerationRequest::new(topic, plan.template_id.as_str(), &plan.model)?
            .with_language(plan.language.clone())
            .with_audience(plan.audience.clone())
            .with_length(plan.length);

        let template = self.catalog.resolve(&request.template_id);
        let prompt = prompt::build(&request, template);
        info!(
            template = template.id,
            model = %request.model,
            "generating article"
        );

        let raw = self.client.complete(&CompletionRequest {
            model: &request.model,
            system: &prompt.system,
            user: &prompt.user,
            max_output_tokens: plan.max_output_tokens,
            temperature: plan.temperature,
        })?;
        debug!(response_chars = raw.chars().count(), "completion received");

        let document = parse(&raw, &request.topic, request.language.as_deref());
        store::save(&document, &plan.document_path)?;

        Ok(GeneratedArticle {
            title: document.title.clone(),
            tags: document.tag_names().into_iter().map(String::from).collect(),
            body_chars: document.body_chars(),
        })
    }

    /// Credential, document check, publisher call.
    fn publish(&self, plan: &RunPlan) -> Result<PublishOutcome> {
        let token = credential::resolve(plan.token.as_deref(), &plan.token_env)?;

        // The publisher parses the file itself; this only proves it is readable.
        let bytes = store::load(&plan.document_path)?;
        debug!(bytes = bytes.len(), "article document ready for publishing");

        let outcome = self.publisher.publish(&token, &plan.document_path)?;
        info!("publisher finished");
        Ok(outcome)
    }
}
