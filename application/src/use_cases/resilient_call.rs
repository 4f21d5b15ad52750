//! Resilient remote call
//!
//! Wraps a single completion request with input validation, a bounded
//! output size and retry with exponential backoff on rate limits.

use crate::config::CallerConfig;
use crate::ports::completion_transport::{CompletionTransport, TransportError};
use crate::ports::observer::{AnalysisObserver, NoObserver};
use analyst_domain::{CompletionRequest, FailureKind, TaskFailure, TaskKind, tag_error};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a resilient call produced no text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("API key is not configured")]
    MissingCredential,

    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("request timed out after {attempts} attempts")]
    TimedOut { attempts: u32 },

    #[error("endpoint unreachable after {attempts} attempts: {reason}")]
    Unreachable { attempts: u32, reason: String },

    #[error("API request failed with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("maximum retries exceeded")]
    RetriesExhausted,
}

impl CallError {
    /// Map the transport error that ended the call.
    fn from_transport(error: TransportError, attempts: u32) -> Self {
        match error {
            TransportError::RateLimited => CallError::RetriesExhausted,
            TransportError::Timeout => CallError::TimedOut { attempts },
            TransportError::Connection(reason) => CallError::Unreachable { attempts, reason },
            TransportError::Status { status, body } => CallError::Rejected { status, body },
            TransportError::MalformedResponse(detail) => CallError::MalformedResponse(detail),
        }
    }

    /// The error rendered with the `Error:` tag.
    pub fn tagged(&self) -> String {
        tag_error(self.to_string())
    }

    pub fn failure_kind(&self) -> FailureKind {
        match self {
            CallError::MissingCredential | CallError::EmptyPrompt => FailureKind::InvalidInput,
            CallError::TimedOut { .. } | CallError::Unreachable { .. } => FailureKind::Unavailable,
            CallError::Rejected { .. }
            | CallError::MalformedResponse(_)
            | CallError::RetriesExhausted => FailureKind::Remote,
        }
    }

    /// Task failure carrying the tagged message.
    pub fn into_failure(self) -> TaskFailure {
        TaskFailure::new(self.failure_kind(), self.tagged())
    }
}

/// Generation settings for one call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallOptions {
    /// Requested output size, capped by the retry policy
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl CallOptions {
    pub fn new(max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            max_output_tokens,
            temperature,
        }
    }
}

/// Per-call attempt bookkeeping
struct RetryState {
    attempt: u32,
    max_attempts: u32,
    started: Instant,
}

impl RetryState {
    fn new(max_attempts: u32) -> Self {
        Self {
            attempt: 0,
            max_attempts: max_attempts.max(1),
            started: Instant::now(),
        }
    }

    /// Move to the next attempt. Returns `false` when none is left.
    fn advance(&mut self) -> bool {
        if self.attempt + 1 < self.max_attempts {
            self.attempt += 1;
            true
        } else {
            false
        }
    }

    fn attempts_made(&self) -> u32 {
        self.attempt + 1
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Resilient wrapper around a [`CompletionTransport`]
///
/// Stateless across calls; safe to share between concurrently running tasks.
pub struct ResilientCaller<T: CompletionTransport> {
    transport: Arc<T>,
    config: CallerConfig,
    observer: Arc<dyn AnalysisObserver>,
}

impl<T: CompletionTransport> ResilientCaller<T> {
    pub fn new(transport: Arc<T>, config: CallerConfig) -> Self {
        Self {
            transport,
            config,
            observer: Arc::new(NoObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn observer(&self) -> &Arc<dyn AnalysisObserver> {
        &self.observer
    }

    /// Call the remote model, returning either its text or a tagged error.
    pub async fn call(&self, task: TaskKind, prompt: &str, options: CallOptions) -> String {
        match self.try_call(task, prompt, options).await {
            Ok(text) => text,
            Err(e) => e.tagged(),
        }
    }

    /// Call the remote model, returning a typed error on failure.
    pub async fn try_call(
        &self,
        task: TaskKind,
        prompt: &str,
        options: CallOptions,
    ) -> Result<String, CallError> {
        let Some(api_key) = self.config.api_key.as_ref() else {
            warn!(task = task.as_str(), "No API key configured");
            return Err(CallError::MissingCredential);
        };
        if prompt.trim().is_empty() {
            return Err(CallError::EmptyPrompt);
        }

        let policy = &self.config.retry;
        let request = CompletionRequest::new(
            self.config.model.clone(),
            prompt,
            options.max_output_tokens,
            options.temperature,
        )
        .with_token_cap(policy.max_output_tokens);

        let mut state = RetryState::new(policy.max_attempts);
        let result = loop {
            let attempt = state.attempt;
            self.observer.on_call_start(task, attempt);
            debug!(
                task = task.as_str(),
                attempt,
                max_tokens = request.max_tokens,
                "Sending completion request"
            );

            let error = match self.transport.complete(api_key, &request).await {
                Ok(text) => break Ok(text),
                Err(e) => e,
            };

            if !error.is_retryable() {
                warn!(task = task.as_str(), attempt, "Terminal remote error: {}", error);
                break Err(CallError::from_transport(error, state.attempts_made()));
            }
            if !state.advance() {
                warn!(
                    task = task.as_str(),
                    "Giving up after {} attempts: {}",
                    state.attempts_made(),
                    error
                );
                break Err(CallError::from_transport(error, state.attempts_made()));
            }

            let delay = match error {
                TransportError::RateLimited => policy.backoff_delay(attempt),
                _ => Duration::ZERO,
            };
            warn!(
                task = task.as_str(),
                attempt,
                "Retrying in {:?}: {}",
                delay,
                error
            );
            self.observer
                .on_retry(task, attempt, &error.to_string(), delay);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        };

        let attempts = state.attempts_made();
        info!(
            task = task.as_str(),
            attempts,
            elapsed_ms = state.elapsed().as_millis() as u64,
            success = result.is_ok(),
            "Completion call settled"
        );
        self.observer.on_call_finish(task, attempts, result.is_ok());
        result.map(|text| text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::use_cases::test_support::{MockTransport, RecordingObserver, fast_caller};
    use analyst_domain::{ApiKey, Model};

    fn options() -> CallOptions {
        CallOptions::new(100, 0.3)
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let transport = Arc::new(MockTransport::scripted(vec![Ok("  positive \n".into())]));
        let caller = fast_caller(transport.clone());

        let text = caller.call(TaskKind::Sentiment, "Classify this", options()).await;

        assert_eq!(text, "positive");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_skips_network() {
        let transport = Arc::new(MockTransport::always(Ok("unused".into())));
        let caller = ResilientCaller::new(transport.clone(), CallerConfig::new(None));

        let text = caller.call(TaskKind::Summary, "Summarize", options()).await;

        assert_eq!(text, "Error: API key is not configured");
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_prompt_skips_network() {
        let transport = Arc::new(MockTransport::always(Ok("unused".into())));
        let caller = fast_caller(transport.clone());

        let err = caller
            .try_call(TaskKind::Qa, "  \n ", options())
            .await
            .unwrap_err();

        assert_eq!(err, CallError::EmptyPrompt);
        assert_eq!(err.failure_kind(), FailureKind::InvalidInput);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_backs_off_exponentially() {
        let transport = Arc::new(MockTransport::always(Err(TransportError::RateLimited)));
        let observer = Arc::new(RecordingObserver::default());
        let caller = fast_caller(transport.clone()).with_observer(observer.clone());

        let text = caller.call(TaskKind::Summary, "Summarize", options()).await;

        assert_eq!(text, "Error: maximum retries exceeded");
        assert_eq!(transport.call_count(), 3);
        let delays = observer.retry_delays.lock().unwrap().clone();
        assert_eq!(
            delays,
            vec![Duration::from_millis(1), Duration::from_millis(2)]
        );
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_rate_limit_then_success() {
        let transport = Arc::new(MockTransport::scripted(vec![
            Err(TransportError::RateLimited),
            Ok("done".into()),
        ]));
        let caller = fast_caller(transport.clone());

        let result = caller.try_call(TaskKind::Qa, "Question", options()).await;

        assert_eq!(result, Ok("done".to_string()));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_timeout_on_every_attempt() {
        let transport = Arc::new(MockTransport::always(Err(TransportError::Timeout)));
        let observer = Arc::new(RecordingObserver::default());
        let caller = fast_caller(transport.clone()).with_observer(observer.clone());

        let err = caller
            .try_call(TaskKind::Sentiment, "Classify", options())
            .await
            .unwrap_err();

        assert_eq!(err, CallError::TimedOut { attempts: 3 });
        assert!(err.tagged().starts_with("Error: request timed out"));
        assert_eq!(err.failure_kind(), FailureKind::Unavailable);
        assert_eq!(transport.call_count(), 3);
        // Timeouts retry without backoff
        assert!(
            observer
                .retry_delays
                .lock()
                .unwrap()
                .iter()
                .all(|d| d.is_zero())
        );
    }

    #[tokio::test]
    async fn test_connection_error_then_success() {
        let transport = Arc::new(MockTransport::scripted(vec![
            Err(TransportError::Connection("connection refused".into())),
            Ok("recovered".into()),
        ]));
        let caller = fast_caller(transport.clone());

        let text = caller.call(TaskKind::Qa, "Question", options()).await;

        assert_eq!(text, "recovered");
    }

    #[tokio::test]
    async fn test_unreachable_after_all_attempts() {
        let transport = Arc::new(MockTransport::always(Err(TransportError::Connection(
            "connection refused".into(),
        ))));
        let caller = fast_caller(transport.clone());

        let err = caller
            .try_call(TaskKind::Qa, "Question", options())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CallError::Unreachable {
                attempts: 3,
                reason: "connection refused".into()
            }
        );
        assert_eq!(err.failure_kind(), FailureKind::Unavailable);
    }

    #[tokio::test]
    async fn test_other_status_is_terminal() {
        let transport = Arc::new(MockTransport::scripted(vec![
            Err(TransportError::Status {
                status: 500,
                body: "internal".into(),
            }),
            Ok("never reached".into()),
        ]));
        let caller = fast_caller(transport.clone());

        let text = caller.call(TaskKind::Summary, "Summarize", options()).await;

        assert_eq!(text, "Error: API request failed with status 500: internal");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_is_terminal() {
        let transport = Arc::new(MockTransport::scripted(vec![Err(
            TransportError::MalformedResponse("missing choices".into()),
        )]));
        let caller = fast_caller(transport.clone());

        let err = caller
            .try_call(TaskKind::Summary, "Summarize", options())
            .await
            .unwrap_err();

        assert_eq!(err.failure_kind(), FailureKind::Remote);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_output_tokens_clamped() {
        let transport = Arc::new(MockTransport::always(Ok("ok".into())));
        let caller = fast_caller(transport.clone());

        caller
            .call(TaskKind::Summary, "Summarize", CallOptions::new(20_000, 0.7))
            .await;

        let requests = transport.requests();
        assert_eq!(requests[0].max_tokens, 4000);
        assert_eq!(requests[0].temperature, 0.7);
        assert!(!requests[0].stream);
    }

    #[tokio::test]
    async fn test_configured_model_and_attempts() {
        let transport = Arc::new(MockTransport::always(Err(TransportError::Timeout)));
        let config = CallerConfig::new(ApiKey::new("k"))
            .with_model(Model::Llama33)
            .with_retry(RetryPolicy::default().with_max_attempts(1));
        let caller = ResilientCaller::new(transport.clone(), config);

        caller.call(TaskKind::Qa, "Question", options()).await;

        assert_eq!(transport.call_count(), 1);
        assert_eq!(transport.requests()[0].model, Model::Llama33);
    }

    #[tokio::test]
    async fn test_observer_sees_attempts() {
        let transport = Arc::new(MockTransport::scripted(vec![
            Err(TransportError::Timeout),
            Ok("fine".into()),
        ]));
        let observer = Arc::new(RecordingObserver::default());
        let caller = fast_caller(transport).with_observer(observer.clone());

        caller.call(TaskKind::Sentiment, "Classify", options()).await;

        assert_eq!(
            observer.events(),
            vec![
                "call_start:sentiment:0",
                "retry:sentiment:0",
                "call_start:sentiment:1",
                "call_finish:sentiment:2:true",
            ]
        );
    }
}
