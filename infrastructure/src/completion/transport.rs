//! HTTP transport for the completion endpoint.

use super::protocol::extract_text;
use analyst_application::{CompletionTransport, TransportError};
use analyst_domain::{ApiKey, CompletionRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// [`CompletionTransport`] backed by one shared `reqwest::Client`.
///
/// Each call is a single attempt; the per-request timeout is set on the
/// client.
pub struct HttpCompletionTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompletionTransport {
    pub fn new(endpoint: impl Into<String>, request_timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Use a preconfigured client (proxy settings, TLS roots, ...).
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(error.to_string())
    }
}

#[async_trait]
impl CompletionTransport for HttpCompletionTransport {
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<String, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Completion endpoint responded");
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }

        let body = response.text().await.map_err(classify)?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        extract_text(&body)
    }
}
