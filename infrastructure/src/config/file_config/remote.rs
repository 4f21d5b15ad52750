//! Remote endpoint configuration from TOML (`[remote]` section)

use analyst_domain::{ApiKey, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw remote endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRemoteConfig {
    /// Completion endpoint URL
    pub endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key (takes precedence over `api_key_env`)
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for FileRemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.cerebras.ai/v1/completions".to_string(),
            model: Model::default().to_string(),
            api_key_env: "CEREBRAS_API_KEY".to_string(),
            api_key: None,
            request_timeout_secs: 30,
        }
    }
}

impl FileRemoteConfig {
    pub fn parse_model(&self) -> Model {
        Model::from(self.model.as_str())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the credential from the process environment.
    pub fn resolve_api_key(&self) -> Option<ApiKey> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential: inline key first, then the named variable.
    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<ApiKey> {
        self.api_key
            .as_deref()
            .and_then(ApiKey::new)
            .or_else(|| lookup(&self.api_key_env).and_then(ApiKey::new))
    }
}
