//! CLI entrypoint for role-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use council_application::{
    LlmGateway, RoleTemplateLoader, RunRolesInput, RunRolesUseCase,
};
use council_domain::{ExecutionMode, OutputFormat, Question, RequestContext, TaskClassifier};
use council_infrastructure::{
    AgentProvider, BuiltinTemplateLoader, ConfigLoader, DirectoryTemplateLoader, FileConfig,
    HttpLlmGateway, ScriptedGateway,
};
use council_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting role-council");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Configuration error: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `role-council --help` for usage.");
    };

    match command {
        Command::Classify {
            question,
            has_files,
            json,
        } => {
            let question = parse_question(question)?;
            let context = has_files.then(RequestContext::with_files);
            let classification = TaskClassifier::new().classify(&question, context.as_ref());

            let output = if json {
                ConsoleFormatter::format_classification_json(&classification)
            } else {
                ConsoleFormatter::format_classification(&question, &classification)
            };
            println!("{}", output);
        }
        Command::Ask {
            question,
            parallel,
            sequential,
            context,
            has_files,
            output,
        } => {
            let question = parse_question(question)?;
            let mut request_context = context
                .as_deref()
                .map(RequestContext::from_json)
                .transpose()
                .context("--context must be valid JSON")?;
            if has_files {
                request_context = Some(request_context.unwrap_or_default().mark_files_attached());
            }

            let mode = if parallel {
                ExecutionMode::Parallel
            } else if sequential {
                ExecutionMode::Sequential
            } else {
                ExecutionMode::from_parallel(config.orchestration.parallel)
            };
            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();

            let ask = AskRequest {
                question,
                context: request_context,
                mode,
                format,
                quiet: cli.quiet,
            };

            // === Dependency Injection ===
            match config.agent.provider {
                AgentProvider::Http => {
                    let gateway = HttpLlmGateway::from_config(&config.agent)
                        .context("Failed to create agent gateway")?;
                    run_ask(Arc::new(gateway), &config, ask).await?;
                }
                AgentProvider::Scripted => {
                    run_ask(Arc::new(ScriptedGateway::demo()), &config, ask).await?;
                }
            }
        }
    }

    Ok(())
}

struct AskRequest {
    question: Question,
    context: Option<RequestContext>,
    mode: ExecutionMode,
    format: OutputFormat,
    quiet: bool,
}

async fn run_ask<G: LlmGateway + 'static>(
    gateway: Arc<G>,
    config: &FileConfig,
    ask: AskRequest,
) -> Result<()> {
    let classification = TaskClassifier::new().classify(&ask.question, ask.context.as_ref());
    if classification.requires_rfi {
        warn!(
            "Question is missing critical data: {}",
            classification.missing_data.join("; ")
        );
    }

    // Print header
    if !ask.quiet && ask.format != OutputFormat::Json {
        println!();
        println!("+============================================================+");
        println!("|           Role Council                                     |");
        println!("+============================================================+");
        println!();
        println!("Question: {}", ask.question);
        println!(
            "Roles: {}",
            classification
                .roles_ordered()
                .iter()
                .map(|i| i.role().display_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    let templates: Arc<dyn RoleTemplateLoader> = match &config.templates.dir {
        Some(dir) => Arc::new(DirectoryTemplateLoader::new(dir.clone()).strict(config.templates.strict)),
        None => Arc::new(BuiltinTemplateLoader::new()),
    };

    // Create use case with injected gateway
    let use_case =
        RunRolesUseCase::new(gateway, templates).with_params(config.orchestration.to_params());

    let mut input = RunRolesInput::new(ask.question, classification).with_mode(ask.mode);
    if let Some(context) = ask.context {
        input = input.with_context(context);
    }

    // Execute with or without progress reporting
    let result = if ask.quiet {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        // Redirected stderr (CI, log capture): plain lines instead of a bar
        use_case.execute_with_progress(input, &SimpleProgress).await?
    };

    // Output results
    let output = match ask.format {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}

fn parse_question(raw: String) -> Result<Question> {
    Ok(Question::try_new(raw)?)
}

/// Stderr logging by verbosity (or `RUST_LOG`), plus a daily file when asked
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "role-council.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
