//! Application layer for doc-analyst
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisParams, CallerConfig, RetryPolicy};
pub use ports::{
    completion_transport::{CompletionTransport, TransportError},
    observer::{AnalysisObserver, CompositeObserver, NoObserver},
};
pub use use_cases::analyze_document::AnalyzeDocumentUseCase;
pub use use_cases::answer_questions::QaTask;
pub use use_cases::resilient_call::{CallError, CallOptions, ResilientCaller};
pub use use_cases::sentiment::SentimentTask;
pub use use_cases::summarize::SummaryTask;
