//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod output;
mod remote;
mod retry;

pub use analysis::FileAnalysisConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use remote::FileRemoteConfig;
pub use retry::FileRetryConfig;

use analyst_application::{AnalysisParams, CallerConfig};
use analyst_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion endpoint, model and credential
    pub remote: FileRemoteConfig,
    /// Retry and cost bounds
    pub retry: FileRetryConfig,
    /// Task sizing and Coordinator limits
    pub analysis: FileAnalysisConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let endpoint = self.remote.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            issues.push(ConfigIssue::error(
                "remote.endpoint",
                format!("'{}' is not an HTTP(S) URL", self.remote.endpoint),
            ));
        }
        if self.remote.model.trim().is_empty() {
            issues.push(ConfigIssue::error("remote.model", "model name cannot be empty"));
        }
        if self.remote.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "remote.request_timeout_secs",
                "request timeout cannot be 0",
            ));
        }
        if self.retry.max_attempts == 0 {
            issues.push(ConfigIssue::error(
                "retry.max_attempts",
                "at least one attempt is required",
            ));
        }
        if self.analysis.qa_concurrency == 0 {
            issues.push(ConfigIssue::warning(
                "analysis.qa_concurrency",
                "0 is not a valid concurrency, using 1",
            ));
        }
        if self.analysis.timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                "analysis.timeout_secs",
                "analysis timeout cannot be 0",
            ));
        }

        issues
    }

    /// Build the caller configuration, resolving the credential once.
    pub fn caller_config(&self) -> CallerConfig {
        CallerConfig::new(self.remote.resolve_api_key())
            .with_model(self.remote.parse_model())
            .with_retry(self.retry.to_policy())
    }

    pub fn analysis_params(&self) -> AnalysisParams {
        self.analysis.to_params()
    }
}
