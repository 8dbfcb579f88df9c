//! Command implementations for quill.
//!
//! This module turns parsed CLI arguments into a run: it resolves the
//! working context and config, builds the run plan, wires the real
//! completion client and publisher into the orchestrator, and prints the
//! user-facing report.

mod run;

use crate::catalog::TemplateCatalog;
use crate::cli::Cli;
use crate::error::Result;

/// Dispatch parsed arguments to their implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    if cli.list_templates {
        return cmd_list_templates();
    }
    run::cmd_run(cli)
}

fn cmd_list_templates() -> Result<()> {
    println!("Article templates:");
    println!("{}", TemplateCatalog::builtin().describe());
    Ok(())
}
