//! Analyze Document use case
//!
//! Runs the summary, sentiment and Q&A tasks concurrently and merges their
//! outcomes. A call always returns a complete [`AggregateResult`].

use crate::config::AnalysisParams;
use crate::ports::completion_transport::CompletionTransport;
use crate::ports::observer::AnalysisObserver;
use crate::use_cases::answer_questions::QaTask;
use crate::use_cases::resilient_call::ResilientCaller;
use crate::use_cases::sentiment::SentimentTask;
use crate::use_cases::summarize::SummaryTask;
use analyst_domain::{
    AggregateResult, AnalysisRequest, FailureKind, QaPair, SentimentResult, SummaryResult,
    TaskFailure, TaskKind, TaskOutcome,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

/// Use case for analysing one document
pub struct AnalyzeDocumentUseCase<T: CompletionTransport + 'static> {
    summary: Arc<SummaryTask<T>>,
    sentiment: Arc<SentimentTask<T>>,
    qa: Arc<QaTask<T>>,
    observer: Arc<dyn AnalysisObserver>,
    timeout: Option<Duration>,
}

impl<T: CompletionTransport + 'static> AnalyzeDocumentUseCase<T> {
    /// Build the three tasks around a shared caller.
    ///
    /// Lifecycle events go to the caller's observer.
    pub fn new(caller: Arc<ResilientCaller<T>>, params: AnalysisParams) -> Self {
        Self {
            observer: Arc::clone(caller.observer()),
            timeout: params.timeout,
            summary: Arc::new(SummaryTask::new(Arc::clone(&caller), params.clone())),
            sentiment: Arc::new(SentimentTask::new(Arc::clone(&caller), params.clone())),
            qa: Arc::new(QaTask::new(caller, params)),
        }
    }

    /// Analyse `text` and answer `questions` about it.
    pub async fn analyze(&self, text: &str, questions: &[String]) -> AggregateResult {
        let request = match AnalysisRequest::new(text, questions.to_vec()) {
            Ok(request) => Arc::new(request),
            Err(e) => {
                warn!("Rejected analysis request: {}", e);
                return self.finish(AggregateResult::degraded(text, e.to_string()));
            }
        };

        info!(
            "Starting analysis of {} characters with {} questions",
            request.char_len(),
            request.questions().len()
        );
        self.observer.on_analysis_start(request.questions().len());

        let summary = self.spawn_task(TaskKind::Summary, {
            let task = Arc::clone(&self.summary);
            let request = Arc::clone(&request);
            async move { task.run(request.text()).await }
        });
        let sentiment = self.spawn_task(TaskKind::Sentiment, {
            let task = Arc::clone(&self.sentiment);
            let request = Arc::clone(&request);
            async move { task.run(request.text()).await }
        });
        let qa = self.spawn_task(TaskKind::Qa, {
            let task = Arc::clone(&self.qa);
            let request = Arc::clone(&request);
            async move { task.run(request.text(), request.questions()).await }
        });

        let in_flight = [
            summary.abort_handle(),
            sentiment.abort_handle(),
            qa.abort_handle(),
        ];
        let (summary, sentiment, qa) = match self.timeout {
            Some(budget) => {
                match tokio::time::timeout(budget, async { tokio::join!(summary, sentiment, qa) })
                    .await
                {
                    Ok(joined) => joined,
                    Err(_) => {
                        for handle in &in_flight {
                            handle.abort();
                        }
                        warn!("Analysis exceeded its {:?} budget, aborting tasks", budget);
                        return self.finish(AggregateResult::degraded(
                            request.text(),
                            format!("analysis timed out after {:?}", budget),
                        ));
                    }
                }
            }
            None => tokio::join!(summary, sentiment, qa),
        };

        let summary = self.settle(TaskKind::Summary, summary);
        let sentiment = self.settle(TaskKind::Sentiment, sentiment);
        let qa = self.settle(TaskKind::Qa, qa);

        if let Some(reason) = total_outage(&summary, &sentiment, &qa) {
            warn!("Remote service unavailable: {}", reason);
            return self.finish(AggregateResult::degraded(request.text(), reason));
        }

        let text = request.text();
        let summary = summary.unwrap_or_else(|f| SummaryResult::from_failure(text, f));
        let sentiment = sentiment.unwrap_or_else(|_| SentimentResult::fallback());
        let qa = qa.unwrap_or_else(|f| QaTask::<T>::fallback(request.questions(), f));
        self.finish(AggregateResult::assemble(summary, sentiment, qa))
    }

    fn spawn_task<P, F>(&self, kind: TaskKind, work: F) -> JoinHandle<TaskOutcome<P>>
    where
        P: Send + 'static,
        F: Future<Output = TaskOutcome<P>> + Send + 'static,
    {
        let observer = Arc::clone(&self.observer);
        tokio::spawn(async move {
            observer.on_task_start(kind);
            let outcome = work.await;
            observer.on_task_complete(kind, outcome.is_success());
            outcome
        })
    }

    /// Flatten a join result; an aborted task becomes a `Panicked` failure.
    fn settle<P>(
        &self,
        kind: TaskKind,
        joined: Result<TaskOutcome<P>, JoinError>,
    ) -> TaskOutcome<P> {
        match joined {
            Ok(outcome) => {
                if let Some(failure) = outcome.failure() {
                    warn!("{} task failed: {}", kind, failure);
                }
                outcome
            }
            Err(e) => {
                warn!("{} task aborted: {}", kind, e);
                self.observer.on_task_complete(kind, false);
                TaskOutcome::Failure(TaskFailure::panicked(format!("{} task aborted", kind)))
            }
        }
    }

    fn finish(&self, result: AggregateResult) -> AggregateResult {
        let degraded = result.is_degraded();
        info!(
            degraded,
            questions_answered = result.metadata.questions_answered,
            "Analysis complete"
        );
        self.observer.on_analysis_complete(degraded);
        result
    }
}

/// Detect that no task reached the remote service.
///
/// Sentiment always calls the remote, so its `Unavailable` failure is the
/// signal. Any response from the endpoint, an error status included, means
/// the service was reachable and each task keeps its own fallback.
fn total_outage(
    summary: &TaskOutcome<SummaryResult>,
    sentiment: &TaskOutcome<SentimentResult>,
    qa: &TaskOutcome<Vec<QaPair>>,
) -> Option<String> {
    if !sentiment.is_unavailable() {
        return None;
    }
    let summary_reached = summary
        .failure()
        .is_none_or(|f| !matches!(f.kind, FailureKind::Unavailable | FailureKind::InvalidInput));
    // A QA task only fails as a whole when every question was unreachable
    let qa_reached = matches!(qa, TaskOutcome::Success(pairs) if !pairs.is_empty());
    if summary_reached || qa_reached {
        return None;
    }
    sentiment.failure().map(|f| f.reason.clone())
}
