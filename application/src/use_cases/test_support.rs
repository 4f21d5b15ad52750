//! Hand-written mocks shared by the use case tests.

use crate::config::{CallerConfig, RetryPolicy};
use crate::ports::completion_transport::{CompletionTransport, TransportError};
use crate::ports::observer::AnalysisObserver;
use crate::use_cases::resilient_call::ResilientCaller;
use analyst_domain::{ApiKey, CompletionRequest, TaskKind};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Document long enough to pass the summary length gate.
pub(crate) const LONG_TEXT: &str = "Artificial intelligence is reshaping how teams plan, write and \
review their daily work. Many organisations report faster drafting and fewer repetitive tasks.";

/// Document below the summary length gate.
pub(crate) const SHORT_TEXT: &str = "Artificial Intelligence is transforming work.";

type Responder = dyn Fn(&CompletionRequest) -> Result<String, TransportError> + Send + Sync;

/// Transport that replays a script, then falls back to a responder.
pub(crate) struct MockTransport {
    script: Mutex<VecDeque<Result<String, TransportError>>>,
    responder: Box<Responder>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockTransport {
    pub(crate) fn scripted(responses: Vec<Result<String, TransportError>>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            responder: Box::new(|_| Err(TransportError::Connection("script exhausted".into()))),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(result: Result<String, TransportError>) -> Self {
        Self::routed(move |_| result.clone())
    }

    pub(crate) fn routed(
        responder: impl Fn(&CompletionRequest) -> Result<String, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies by task, keyed on the prompt each task builds.
    pub(crate) fn by_task() -> Self {
        Self::routed(|request| {
            let prompt = &request.prompt;
            if prompt.starts_with("Analyze the sentiment") {
                Ok("Positive".to_string())
            } else if let Some(idx) = prompt.find("Question: ") {
                let question = prompt[idx + "Question: ".len()..]
                    .lines()
                    .next()
                    .unwrap_or_default();
                Ok(format!("Answer to {}", question))
            } else {
                Ok("**MAIN TOPIC & KEY THEMES**\n• AI changes work".to_string())
            }
        })
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn calls_matching(&self, needle: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.prompt.contains(needle))
            .count()
    }
}

#[async_trait]
impl CompletionTransport for MockTransport {
    async fn complete(
        &self,
        _api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let scripted = self.script.lock().unwrap().pop_front();
        match scripted {
            Some(result) => result,
            None => (self.responder)(request),
        }
    }
}

/// Observer that records every event as a string
#[derive(Default)]
pub(crate) struct RecordingObserver {
    pub(crate) events: Mutex<Vec<String>>,
    pub(crate) retry_delays: Mutex<Vec<Duration>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl AnalysisObserver for RecordingObserver {
    fn on_analysis_start(&self, question_count: usize) {
        self.push(format!("analysis_start:{}", question_count));
    }

    fn on_task_start(&self, task: TaskKind) {
        self.push(format!("task_start:{}", task.as_str()));
    }

    fn on_call_start(&self, task: TaskKind, attempt: u32) {
        self.push(format!("call_start:{}:{}", task.as_str(), attempt));
    }

    fn on_retry(&self, task: TaskKind, attempt: u32, _reason: &str, delay: Duration) {
        self.retry_delays.lock().unwrap().push(delay);
        self.push(format!("retry:{}:{}", task.as_str(), attempt));
    }

    fn on_call_finish(&self, task: TaskKind, attempts: u32, success: bool) {
        self.push(format!("call_finish:{}:{}:{}", task.as_str(), attempts, success));
    }

    fn on_task_complete(&self, task: TaskKind, success: bool) {
        self.push(format!("task_complete:{}:{}", task.as_str(), success));
    }

    fn on_analysis_complete(&self, degraded: bool) {
        self.push(format!("analysis_complete:{}", degraded));
    }
}

/// Caller with a test credential and a 1 ms backoff unit.
pub(crate) fn fast_caller(transport: Arc<MockTransport>) -> ResilientCaller<MockTransport> {
    let retry = RetryPolicy::default().with_backoff_unit(Duration::from_millis(1));
    ResilientCaller::new(transport, CallerConfig::new(ApiKey::new("test-key")).with_retry(retry))
}
