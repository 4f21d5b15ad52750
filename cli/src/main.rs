//! CLI entrypoint for doc-analyst
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use analyst_application::{
    AnalysisObserver, AnalyzeDocumentUseCase, CompositeObserver, ResilientCaller,
};
use analyst_domain::{OutputFormat, Severity};
use analyst_infrastructure::{ConfigLoader, FileConfig, HttpCompletionTransport, JsonlCallLogger};
use analyst_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, parse_questions, read_document,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "error:".red().bold(), issue),
            Severity::Warning => eprintln!("{} {}", "warning:".yellow().bold(), issue),
        }
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Input ===
    let document = read_document(cli.file.as_deref())?;
    let questions = parse_questions(&cli.question, cli.questions.as_deref());

    info!(
        "Starting doc-analyst ({} words, {} questions)",
        analyst_domain::word_count(&document),
        questions.len()
    );

    // === Dependency Injection ===
    let caller_config = config.caller_config();
    if caller_config.api_key.is_none() {
        warn!(
            "No API key found in ${}; remote calls will fail",
            config.remote.api_key_env
        );
    }

    let transport = Arc::new(
        HttpCompletionTransport::new(&config.remote.endpoint, config.remote.request_timeout())
            .context("Failed to build HTTP client")?,
    );

    let mut observers = CompositeObserver::default();
    if !cli.quiet && format != OutputFormat::Json {
        if std::io::stderr().is_terminal() {
            observers.push(Arc::new(ProgressReporter::new()));
        } else {
            observers.push(Arc::new(SimpleProgress));
        }
    }
    if let Some(path) = &cli.call_log {
        match JsonlCallLogger::new(path) {
            Some(logger) => observers.push(Arc::new(logger)),
            None => warn!("Call log disabled: could not open {}", path.display()),
        }
    }
    let observer: Arc<dyn AnalysisObserver> = Arc::new(observers);

    let caller = Arc::new(ResilientCaller::new(transport, caller_config).with_observer(observer));
    let use_case = AnalyzeDocumentUseCase::new(caller, config.analysis_params());

    let result = use_case.analyze(&document, &questions).await;

    // Output results
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
