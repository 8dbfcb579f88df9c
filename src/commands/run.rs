//! Implementation of the default `quill` run.

use crate::catalog::TemplateCatalog;
use crate::cli::Cli;
use crate::completion::OpenAiClient;
use crate::config::Config;
use crate::context::RunContext;
use crate::error::Result;
use crate::orchestrator::{Orchestrator, RunMode, RunPlan, RunReport};
use crate::publish::CommandPublisher;
use crate::topic::TopicSource;

const RULE: &str = "==================================================";

/// Execute a generate/publish run.
pub fn cmd_run(cli: Cli) -> Result<()> {
    let ctx = RunContext::resolve()?;
    ctx.load_env_file();
    let config = ctx.load_config(cli.config.as_deref())?;
    let mode = RunMode::from_flags(cli.generate_only, cli.publish_only)?;

    let catalog = TemplateCatalog::builtin();
    let plan = build_plan(&cli, &config, &ctx, mode);

    if mode.generates() {
        print_settings(&plan, &catalog);
        if plan.topic.is_interactive() {
            eprintln!("Enter the topic (multiple lines allowed; finish with Ctrl+D, or Ctrl+Z on Windows):");
            eprintln!("{}", RULE);
        }
    }

    let client = OpenAiClient::from_env(&config.api_base_url, &config.api_key_env)?;
    let publisher = CommandPublisher::new(config.publisher.clone());

    let report = Orchestrator::new(&catalog, client, publisher).run(&plan)?;
    print_report(&report);
    Ok(())
}

/// Merge CLI arguments over config into a run plan.
fn build_plan(cli: &Cli, config: &Config, ctx: &RunContext, mode: RunMode) -> RunPlan {
    RunPlan {
        mode,
        topic: TopicSource::select(cli.topic_file.clone(), cli.interactive, cli.topic.clone()),
        template_id: cli.template.clone(),
        language: cli.lang.clone(),
        audience: cli.audience.clone(),
        length: cli.length,
        model: cli.model.clone().unwrap_or_else(|| config.model.clone()),
        max_output_tokens: config.max_output_tokens,
        temperature: config.temperature,
        document_path: ctx.document_path(config, cli.output.as_deref()),
        token: cli.token.clone(),
        token_env: config.token_env.clone(),
    }
}

fn print_settings(plan: &RunPlan, catalog: &TemplateCatalog) {
    let template = catalog.resolve(&plan.template_id);
    println!("Settings:");
    if let TopicSource::Argument(topic) = &plan.topic {
        println!("  Topic:     {}", topic);
    }
    println!("  Template:  {} ({})", template.id, template.description);
    println!("  Model:     {}", plan.model);
    if let Some(language) = &plan.language {
        println!("  Language:  {}", language);
    }
    if let Some(audience) = &plan.audience {
        println!("  Audience:  {}", audience);
    }
    if let Some(length) = plan.length {
        println!("  Length:    {}", length);
    }
    println!();
}

fn print_report(report: &RunReport) {
    if let Some(article) = &report.generated {
        println!("Article generated.");
        println!("  Title:     {}", article.title);
        println!("  Tags:      {}", article.tags.join(", "));
        println!("  Body:      {} characters", article.body_chars);
        println!("  Saved to:  {}", report.document_path.display());
        println!();
    }

    if let Some(outcome) = &report.published {
        println!("Published {}.", report.document_path.display());
        if !outcome.stdout.is_empty() {
            print!("{}", outcome.stdout);
        }
        if !outcome.stderr.is_empty() {
            eprint!("{}", outcome.stderr);
        }
    }

    println!("Done.");
}
