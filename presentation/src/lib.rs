//! Presentation layer for doc-analyst
//!
//! This crate contains CLI definitions, document input handling, output
//! formatters and progress reporters.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::document::{
    InputError, extract_pdf_text, parse_questions, read_document, read_file, read_pdf_file,
    read_text_file,
};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
