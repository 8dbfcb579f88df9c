//! Quill: generate technical articles with a language model and publish them.
//!
//! This is the main entry point for the `quill` CLI. It parses arguments,
//! sets up logging, dispatches to the run, and maps errors to exit codes.

mod article;
mod catalog;
mod cli;
mod commands;
mod completion;
pub mod config;
pub mod context;
mod credential;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod orchestrator;
mod publish;
mod store;
mod topic;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Logs go to stderr so stdout carries only the run report.
/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "quill=info",
        1 => "quill=debug",
        _ => "quill=trace",
    }
}
