//! Domain layer for doc-analyst
//!
//! This crate contains the value objects and pure policy behind a document
//! analysis. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Analysis
//!
//! A document is handed to three independent tasks that all run against the
//! same immutable [`AnalysisRequest`]:
//!
//! - **Summary**: multi-section bulleted summary of the full text
//! - **Sentiment**: single-word classification of the leading content
//! - **Q&A**: one answer per question, using the leading content as context
//!
//! Each task settles into a [`TaskOutcome`]; the Coordinator turns failures
//! into the documented fallback values and assembles an [`AggregateResult`].
//!
//! ## Tagged errors
//!
//! The remote-call layer reports failures as strings prefixed with
//! [`ERROR_TAG`] so that a summary can carry the error text in place of the
//! generated content.

pub mod analysis;
pub mod completion;
pub mod config;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use analysis::{
    outcome::{FailureKind, TaskFailure, TaskOutcome},
    request::AnalysisRequest,
    results::{
        AggregateResult, AnalysisMetadata, QaPair, Sentiment, SentimentResult, SummaryResult,
        SummaryStatus,
    },
    task::TaskKind,
};
pub use completion::{api_key::ApiKey, request::CompletionRequest};
pub use config::{ConfigIssue, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    model::Model,
    text::{ERROR_TAG, is_error_tagged, leading_words, tag_error, word_count},
};
pub use prompt::PromptTemplate;
