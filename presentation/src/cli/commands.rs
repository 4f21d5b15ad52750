//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every section
    Full,
    /// Only the summary text
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for analyst_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => analyst_domain::OutputFormat::Full,
            OutputFormat::Summary => analyst_domain::OutputFormat::Summary,
            OutputFormat::Json => analyst_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for doc-analyst
#[derive(Parser, Debug)]
#[command(name = "doc-analyst")]
#[command(author, version, about = "Summarize, classify and question a text document")]
#[command(long_about = r#"
doc-analyst sends a document to a remote text-generation model and reports:

1. Summary: a sectioned, bulleted analysis of the full text
2. Sentiment: positive, negative or neutral, based on the opening content
3. Q&A: an answer to each question you ask about the document

The three analyses run concurrently. A failed analysis falls back to a
default value instead of aborting the others.

The API key is read from $CEREBRAS_API_KEY unless configured otherwise.

Configuration files are loaded from (in priority order):
1. ANALYST_* environment variables
2. --config <path>     Explicit config file
3. ./analyst.toml      Project-level config
4. ~/.config/doc-analyst/config.toml   Global config

Example:
  doc-analyst report.txt
  doc-analyst report.pdf -q "What is the main risk?" -q "Who is affected?"
  cat notes.txt | doc-analyst --questions "What changed?, Why?" -o json
"#)]
pub struct Cli {
    /// Path to a .txt or .pdf document (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Question to answer about the document (can be specified multiple times)
    #[arg(short = 'q', long = "question", value_name = "QUESTION")]
    pub question: Vec<String>,

    /// Comma-separated list of questions
    #[arg(long, value_name = "LIST")]
    pub questions: Option<String>,

    /// Output format (defaults to the configured format, else full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append one JSON line per call event to this file
    #[arg(long, value_name = "PATH")]
    pub call_log: Option<PathBuf>,
}
