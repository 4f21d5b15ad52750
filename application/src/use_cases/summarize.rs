//! Summary task
//!
//! Sends the full document with the sectioned summary prompt. This is the
//! only task that refuses short input.

use crate::config::AnalysisParams;
use crate::ports::completion_transport::CompletionTransport;
use crate::use_cases::resilient_call::{CallOptions, ResilientCaller};
use analyst_domain::{
    PromptTemplate, SummaryResult, TaskFailure, TaskKind, TaskOutcome, tag_error,
};
use std::sync::Arc;
use tracing::debug;

/// Sampling temperature for summaries
pub const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Use case producing a [`SummaryResult`]
pub struct SummaryTask<T: CompletionTransport> {
    caller: Arc<ResilientCaller<T>>,
    params: AnalysisParams,
}

impl<T: CompletionTransport> SummaryTask<T> {
    pub fn new(caller: Arc<ResilientCaller<T>>, params: AnalysisParams) -> Self {
        Self { caller, params }
    }

    /// Summarize `text`, settling into a [`TaskOutcome`].
    pub async fn run(&self, text: &str) -> TaskOutcome<SummaryResult> {
        let chars = text.trim().chars().count();
        if chars < self.params.min_summary_chars {
            debug!(chars, "Text below summary threshold, skipping remote call");
            return TaskOutcome::Failure(TaskFailure::invalid_input(tag_error(format!(
                "text too short to summarize ({} characters, minimum {})",
                chars, self.params.min_summary_chars
            ))));
        }

        let prompt = PromptTemplate::summary(text);
        let options = CallOptions::new(self.params.summary_max_tokens(), SUMMARY_TEMPERATURE);
        match self.caller.try_call(TaskKind::Summary, &prompt, options).await {
            Ok(summary) => TaskOutcome::Success(SummaryResult::from_generated(text, summary)),
            Err(e) => TaskOutcome::Failure(e.into_failure()),
        }
    }

    /// Summarize `text`, substituting the error result on failure.
    pub async fn summarize(&self, text: &str) -> SummaryResult {
        self.run(text)
            .await
            .unwrap_or_else(|failure| SummaryResult::from_failure(text, failure))
    }
}
