//! Infrastructure layer for doc-analyst
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod completion;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use completion::HttpCompletionTransport;
pub use config::{
    ConfigLoader, FileAnalysisConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileRemoteConfig, FileRetryConfig,
};
pub use logging::JsonlCallLogger;
