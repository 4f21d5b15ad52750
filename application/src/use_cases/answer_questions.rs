//! Question answering task
//!
//! Answers every question against the same leading-words context. Questions
//! run with bounded concurrency; results keep the input order.

use crate::config::AnalysisParams;
use crate::ports::completion_transport::CompletionTransport;
use crate::use_cases::resilient_call::{CallError, CallOptions, ResilientCaller};
use analyst_domain::{
    FailureKind, PromptTemplate, QaPair, TaskFailure, TaskKind, TaskOutcome, leading_words,
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sampling temperature for answers
pub const QA_TEMPERATURE: f32 = 0.7;

/// Output budget per answer
pub const QA_MAX_TOKENS: u32 = 150;

/// Use case producing one [`QaPair`] per question
pub struct QaTask<T: CompletionTransport> {
    caller: Arc<ResilientCaller<T>>,
    params: AnalysisParams,
}

impl<T: CompletionTransport> QaTask<T> {
    pub fn new(caller: Arc<ResilientCaller<T>>, params: AnalysisParams) -> Self {
        Self { caller, params }
    }

    /// Answer `questions`, settling into a [`TaskOutcome`].
    ///
    /// A failed question becomes an apology pair. The task itself only fails
    /// when every question found the endpoint unreachable.
    pub async fn run(&self, text: &str, questions: &[String]) -> TaskOutcome<Vec<QaPair>> {
        if questions.is_empty() {
            return TaskOutcome::Success(Vec::new());
        }

        let context = leading_words(text, self.params.qa_context_words);
        let options = CallOptions::new(QA_MAX_TOKENS, QA_TEMPERATURE);
        debug!(
            questions = questions.len(),
            concurrency = self.params.qa_concurrency,
            "Answering questions"
        );

        let prompts: Vec<String> = questions
            .iter()
            .map(|question| PromptTemplate::question(context, question))
            .collect();
        let caller = &self.caller;
        let answers: Vec<Result<String, CallError>> = stream::iter(prompts)
            .map(|prompt| async move { caller.try_call(TaskKind::Qa, &prompt, options).await })
            .buffered(self.params.qa_concurrency.max(1))
            .collect()
            .await;

        if let Some(failure) = Self::all_unavailable(&answers) {
            return TaskOutcome::Failure(failure);
        }

        let pairs = questions
            .iter()
            .zip(answers)
            .map(|(question, answer)| match answer {
                Ok(answer) => QaPair::new(question, answer),
                Err(e) => {
                    warn!("Question {:?} failed: {}", question, e);
                    QaPair::unanswered(question)
                }
            })
            .collect();
        TaskOutcome::Success(pairs)
    }

    /// Answer `questions`, substituting the fallback on failure.
    pub async fn answer(&self, text: &str, questions: &[String]) -> Vec<QaPair> {
        self.run(text, questions)
            .await
            .unwrap_or_else(|failure| Self::fallback(questions, failure))
    }

    /// Fallback list for a failed task.
    ///
    /// Remote failures keep one apology per question; an aborted task
    /// yields an empty list.
    pub fn fallback(questions: &[String], failure: &TaskFailure) -> Vec<QaPair> {
        match failure.kind {
            FailureKind::Panicked => Vec::new(),
            _ => questions.iter().map(QaPair::unanswered).collect(),
        }
    }

    fn all_unavailable(answers: &[Result<String, CallError>]) -> Option<TaskFailure> {
        let mut first = None;
        for answer in answers {
            match answer {
                Err(e) if e.failure_kind() == FailureKind::Unavailable => {
                    first.get_or_insert_with(|| e.tagged());
                }
                _ => return None,
            }
        }
        first.map(TaskFailure::unavailable)
    }
}
