//! Configuration handed to the resilient caller.

use super::retry_policy::RetryPolicy;
use analyst_domain::{ApiKey, Model};

/// Everything the resilient caller needs besides its transport.
///
/// The credential is resolved once by the configuration loader; a `None`
/// key makes every call fail fast without touching the network.
#[derive(Debug, Clone, Default)]
pub struct CallerConfig {
    pub api_key: Option<ApiKey>,
    pub model: Model,
    pub retry: RetryPolicy,
}

impl CallerConfig {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
