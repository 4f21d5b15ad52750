//! Sentiment task
//!
//! Classifies the leading part of the document as positive, negative or
//! neutral. The model is not asked for a confidence, so a plausible score is
//! sampled on success.

use crate::config::AnalysisParams;
use crate::ports::completion_transport::CompletionTransport;
use crate::use_cases::resilient_call::{CallOptions, ResilientCaller};
use analyst_domain::{
    PromptTemplate, Sentiment, SentimentResult, TaskKind, TaskOutcome, leading_words,
};
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::debug;

/// Sampling temperature for classification
pub const SENTIMENT_TEMPERATURE: f32 = 0.3;

/// Output budget; the reply is a single word
pub const SENTIMENT_MAX_TOKENS: u32 = 100;

/// Range of the synthetic confidence score
pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.70..=0.95;

/// Use case producing a [`SentimentResult`]
pub struct SentimentTask<T: CompletionTransport> {
    caller: Arc<ResilientCaller<T>>,
    params: AnalysisParams,
}

impl<T: CompletionTransport> SentimentTask<T> {
    pub fn new(caller: Arc<ResilientCaller<T>>, params: AnalysisParams) -> Self {
        Self { caller, params }
    }

    /// Classify `text`, settling into a [`TaskOutcome`].
    pub async fn run(&self, text: &str) -> TaskOutcome<SentimentResult> {
        let context = leading_words(text, self.params.sentiment_context_words);
        let prompt = PromptTemplate::sentiment(context);
        let options = CallOptions::new(SENTIMENT_MAX_TOKENS, SENTIMENT_TEMPERATURE);

        match self.caller.try_call(TaskKind::Sentiment, &prompt, options).await {
            Ok(raw) => {
                let sentiment = Sentiment::parse(&raw);
                debug!(raw = %raw, sentiment = %sentiment, "Sentiment classified");
                TaskOutcome::Success(SentimentResult::new(sentiment, synthetic_confidence()))
            }
            Err(e) => TaskOutcome::Failure(e.into_failure()),
        }
    }

    /// Classify `text`, substituting neutral/0.5 on failure.
    pub async fn analyze(&self, text: &str) -> SentimentResult {
        self.run(text)
            .await
            .unwrap_or_else(|_| SentimentResult::fallback())
    }
}

/// Confidence sampled from [`CONFIDENCE_RANGE`], rounded to two decimals.
fn synthetic_confidence() -> f64 {
    let raw = rand::thread_rng().gen_range(CONFIDENCE_RANGE);
    (raw * 100.0).round() / 100.0
}
