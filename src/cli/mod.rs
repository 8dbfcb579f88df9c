//! CLI argument parsing for quill.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument structure; the run itself is
//! assembled in the `commands` module.

use crate::article::LengthClass;
use crate::catalog::{DEFAULT_TEMPLATE_ID, TemplateCatalog};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  quill \"How to use GenServer in Elixir\" --template tutorial --lang Elixir
  quill \"React vs Vue.js\" --template comparison --lang JavaScript
  quill \"Setting up Docker\" --template troubleshooting --audience \"DevOps engineer\"
  quill --topic-file topic.txt --generate-only
  quill --publish-only --token $QIITA_ACCESS_TOKEN";

/// Help epilog: the built-in templates followed by usage examples.
fn after_help() -> String {
    format!(
        "Article templates:\n{}\n\n{}",
        TemplateCatalog::builtin().describe(),
        EXAMPLES
    )
}

/// Quill: generate a technical article with a language model and publish it.
///
/// The topic is turned into a prompt from a template, sent to the completion
/// service, and the reply is parsed into a title, tags and Markdown body.
/// The article is saved as JSON and handed to an external publisher.
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(after_help = after_help())]
pub struct Cli {
    /// Article topic (may span multiple lines).
    pub topic: Option<String>,

    /// Read the topic from a file.
    #[arg(long, value_name = "PATH")]
    pub topic_file: Option<PathBuf>,

    /// Read the topic from standard input until end-of-input (Ctrl+D).
    #[arg(short, long)]
    pub interactive: bool,

    /// Article template; unknown names fall back to `tutorial`.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_ID)]
    pub template: String,

    /// Programming language used in code examples.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Target audience, overriding the template default.
    #[arg(short, long)]
    pub audience: Option<String>,

    /// Article length, overriding the template default.
    #[arg(long, value_enum)]
    pub length: Option<LengthClass>,

    /// Completion model (default from config: gpt-4o-mini).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Publish access token (falls back to QIITA_ACCESS_TOKEN).
    #[arg(long)]
    pub token: Option<String>,

    /// Generate and save the article without publishing it.
    #[arg(long, conflicts_with = "publish_only")]
    pub generate_only: bool,

    /// Publish a previously generated article without generating a new one.
    #[arg(long)]
    pub publish_only: bool,

    /// Path to the config file (default: ./quill.yaml if present).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write (or, with --publish-only, read) the article JSON.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// List the available templates and exit.
    #[arg(long)]
    pub list_templates: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
