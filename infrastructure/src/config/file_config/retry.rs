//! Retry configuration from TOML (`[retry]` section)

use analyst_application::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw retry configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Attempts per remote call, including the first
    pub max_attempts: u32,
    /// Backoff unit in milliseconds
    pub backoff_unit_ms: u64,
    /// Upper bound for any requested output size
    pub max_output_tokens: u32,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            backoff_unit_ms: policy.backoff_unit.as_millis() as u64,
            max_output_tokens: policy.max_output_tokens,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(self.max_attempts)
            .with_backoff_unit(Duration::from_millis(self.backoff_unit_ms))
            .with_max_output_tokens(self.max_output_tokens)
    }
}
