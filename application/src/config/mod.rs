//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RetryPolicy`] - attempt cap, backoff unit and output token ceiling
//! - [`CallerConfig`] - credential and model handed to the resilient caller
//! - [`AnalysisParams`] - per-task context sizes, QA fan-out and time budget

pub mod analysis_params;
pub mod caller_config;
pub mod retry_policy;

pub use analysis_params::AnalysisParams;
pub use caller_config::CallerConfig;
pub use retry_policy::RetryPolicy;
