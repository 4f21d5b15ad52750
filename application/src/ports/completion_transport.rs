//! Completion transport port
//!
//! Defines the interface for sending one completion request to the remote
//! text-generation endpoint.

use analyst_domain::{ApiKey, CompletionRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a single transport attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("rate limited")]
    RateLimited,

    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    /// Whether a later attempt may succeed where this one failed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TransportError::RateLimited | TransportError::Timeout | TransportError::Connection(_)
        )
    }
}

/// Transport for completion calls
///
/// One call is one attempt; retry policy lives in the application layer.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Send `request` and return the generated text.
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<String, TransportError>;
}
