//! Analysis value objects - immutable result types for each task and the
//! aggregate returned to callers.
//!
//! - [`SummaryResult`] - summary text plus word counts
//! - [`SentimentResult`] - classification with a confidence score
//! - [`QaPair`] - one answered (or apologised-for) question
//! - [`AggregateResult`] - everything merged, owned by the Coordinator
//!
//! Every fallback value the Coordinator may substitute for a failed task is
//! constructed here so the shapes stay in one place.

use super::outcome::{FailureKind, TaskFailure};
use crate::core::text::{is_error_tagged, tag_error, word_count};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Summary text used when the summary task aborted unexpectedly.
pub const SUMMARY_ABORTED: &str = "Error generating summary";

/// Answer used for a question whose remote call failed.
pub const UNANSWERED: &str = "Unable to process this question due to an error.";

/// Summary text of a fully degraded aggregate.
pub const DEGRADED_SUMMARY: &str = "Analysis failed due to system error";

/// Whether the summary text is generated content or an error report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Success,
    Error,
}

/// Result of the summary task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Generated summary, or an error-tagged message
    pub summary: String,
    /// Words in the analysed document
    pub word_count: usize,
    /// Words in the summary (0 when the summary is an error)
    pub summary_length: usize,
    pub status: SummaryStatus,
}

impl SummaryResult {
    /// Build the result for text returned by the remote model.
    ///
    /// Text carrying the error tag is reported as [`SummaryStatus::Error`].
    pub fn from_generated(document: &str, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        if is_error_tagged(&summary) {
            return Self::failed(document, summary);
        }
        Self {
            word_count: word_count(document),
            summary_length: word_count(&summary),
            summary,
            status: SummaryStatus::Success,
        }
    }

    /// Error result; the document word count is still reported.
    pub fn failed(document: &str, message: impl Into<String>) -> Self {
        Self {
            summary: message.into(),
            word_count: word_count(document),
            summary_length: 0,
            status: SummaryStatus::Error,
        }
    }

    /// Fallback for a task that never settled (panic or abort).
    ///
    /// Nothing about the run is trusted, so both counts are zero.
    pub fn aborted() -> Self {
        Self {
            summary: SUMMARY_ABORTED.to_string(),
            word_count: 0,
            summary_length: 0,
            status: SummaryStatus::Error,
        }
    }

    /// Fallback for a failed summary task.
    ///
    /// Rejected input and remote errors keep their error-tagged reason; an
    /// aborted task gets [`SummaryResult::aborted`].
    pub fn from_failure(document: &str, failure: &TaskFailure) -> Self {
        match failure.kind {
            FailureKind::Panicked => Self::aborted(),
            _ if is_error_tagged(&failure.reason) => Self::failed(document, &failure.reason),
            _ => Self::failed(document, tag_error(&failure.reason)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == SummaryStatus::Error
    }
}

/// Sentiment label returned by the model
///
/// Anything that does not normalise to one of the three labels is kept
/// verbatim as [`Sentiment::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl Sentiment {
    /// Classify raw model output.
    ///
    /// Case and surrounding punctuation are ignored ("Positive." is positive).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let normalized = trimmed
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        match normalized.as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Sentiment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Sentiment::parse(&s))
    }
}

/// Result of the sentiment task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
}

impl SentimentResult {
    /// Confidence of the task-level fallback.
    pub const FALLBACK_CONFIDENCE: f64 = 0.5;

    /// Create a result, clamping the confidence into `[0, 1]`.
    pub fn new(sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Low-confidence neutral used when the sentiment task fails.
    pub fn fallback() -> Self {
        Self::new(Sentiment::Neutral, Self::FALLBACK_CONFIDENCE)
    }

    /// Zero-confidence neutral used when the whole analysis degrades.
    pub fn degraded() -> Self {
        Self::new(Sentiment::Neutral, 0.0)
    }
}

/// A question and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    /// Not part of the wire format; pairs read back from JSON count as answered.
    #[serde(skip_serializing, default = "answered_by_default")]
    answered: bool,
}

fn answered_by_default() -> bool {
    true
}

impl QaPair {
    /// Pair holding a model-generated answer.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            answered: true,
        }
    }

    /// Apology answer for a question whose call failed.
    pub fn unanswered(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: UNANSWERED.to_string(),
            answered: false,
        }
    }

    /// Whether the answer came from the model rather than the fallback.
    pub fn is_answered(&self) -> bool {
        self.answered
    }
}

/// Counters reported alongside the merged results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub word_count: usize,
    pub summary_length: usize,
    pub questions_answered: usize,
    /// Orchestration-level fault description, present only when degraded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub summary: String,
    pub sentiment: SentimentResult,
    pub qa: Vec<QaPair>,
    pub metadata: AnalysisMetadata,
}

impl AggregateResult {
    /// Merge the three task results.
    pub fn assemble(summary: SummaryResult, sentiment: SentimentResult, qa: Vec<QaPair>) -> Self {
        let metadata = AnalysisMetadata {
            word_count: summary.word_count,
            summary_length: summary.summary_length,
            questions_answered: qa.len(),
            error: None,
        };
        Self {
            summary: summary.summary,
            sentiment,
            qa,
            metadata,
        }
    }

    /// Fallback for an orchestration-level fault.
    ///
    /// The word count is still computed from the original text.
    pub fn degraded(document: &str, error: impl Into<String>) -> Self {
        Self {
            summary: DEGRADED_SUMMARY.to_string(),
            sentiment: SentimentResult::degraded(),
            qa: Vec::new(),
            metadata: AnalysisMetadata {
                word_count: word_count(document),
                summary_length: 0,
                questions_answered: 0,
                error: Some(error.into()),
            },
        }
    }

    /// Returns `true` if this is an orchestration-level fallback.
    pub fn is_degraded(&self) -> bool {
        self.metadata.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Artificial Intelligence is transforming work.";

    #[test]
    fn test_summary_from_generated() {
        let result = SummaryResult::from_generated(DOC, "AI changes jobs quickly");
        assert_eq!(result.status, SummaryStatus::Success);
        assert_eq!(result.word_count, 5);
        assert_eq!(result.summary_length, 4);
    }

    #[test]
    fn test_summary_from_generated_error_tag() {
        let result = SummaryResult::from_generated(DOC, "Error: maximum retries exceeded");
        assert!(result.is_error());
        assert_eq!(result.summary_length, 0);
        assert_eq!(result.word_count, 5);
    }

    #[test]
    fn test_summary_from_failure_keeps_tagged_reason() {
        let failure = TaskFailure::invalid_input("Error: text too short");
        let result = SummaryResult::from_failure(DOC, &failure);
        assert_eq!(result.summary, "Error: text too short");
        assert!(result.is_error());
    }

    #[test]
    fn test_summary_from_failure_tags_plain_reason() {
        let failure = TaskFailure::remote("bad gateway");
        let result = SummaryResult::from_failure(DOC, &failure);
        assert_eq!(result.summary, "Error: bad gateway");
    }

    #[test]
    fn test_summary_from_panic_zeroes_counts() {
        let failure = TaskFailure::panicked("task panicked");
        let result = SummaryResult::from_failure(DOC, &failure);
        assert_eq!(result.summary, SUMMARY_ABORTED);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.summary_length, 0);
        assert!(result.is_error());
    }

    #[test]
    fn test_sentiment_parse() {
        assert_eq!(Sentiment::parse("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::parse("  Negative.\n"), Sentiment::Negative);
        assert_eq!(Sentiment::parse("NEUTRAL"), Sentiment::Neutral);
        assert_eq!(
            Sentiment::parse(" mostly upbeat "),
            Sentiment::Other("mostly upbeat".to_string())
        );
    }

    #[test]
    fn test_sentiment_serializes_as_string() {
        let result = SentimentResult::new(Sentiment::Positive, 0.82);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["confidence"], 0.82);
    }

    #[test]
    fn test_sentiment_confidence_clamped() {
        assert_eq!(SentimentResult::new(Sentiment::Neutral, 1.7).confidence, 1.0);
        assert_eq!(SentimentResult::new(Sentiment::Neutral, -0.2).confidence, 0.0);
    }

    #[test]
    fn test_sentiment_fallbacks() {
        assert_eq!(SentimentResult::fallback().sentiment, Sentiment::Neutral);
        assert_eq!(SentimentResult::fallback().confidence, 0.5);
        assert_eq!(SentimentResult::degraded().confidence, 0.0);
    }

    #[test]
    fn test_unanswered_pair() {
        let pair = QaPair::unanswered("What is AI?");
        assert_eq!(pair.question, "What is AI?");
        assert!(!pair.is_answered());
        assert!(QaPair::new("q", "a").is_answered());
    }

    #[test]
    fn test_answer_matching_apology_text_is_still_answered() {
        let pair = QaPair::new("q", UNANSWERED);
        assert!(pair.is_answered());
        assert_ne!(pair, QaPair::unanswered("q"));
    }

    #[test]
    fn test_answered_flag_not_serialized() {
        let json = serde_json::to_value(QaPair::unanswered("q")).unwrap();
        assert_eq!(json, serde_json::json!({ "question": "q", "answer": UNANSWERED }));

        let read: QaPair = serde_json::from_value(json).unwrap();
        assert!(read.is_answered());
    }

    #[test]
    fn test_assemble_counts_questions() {
        let summary = SummaryResult::from_generated(DOC, "short summary");
        let qa = vec![QaPair::new("a", "1"), QaPair::unanswered("b")];
        let result = AggregateResult::assemble(summary, SentimentResult::fallback(), qa);
        assert_eq!(result.metadata.questions_answered, 2);
        assert_eq!(result.metadata.word_count, 5);
        assert_eq!(result.metadata.summary_length, 2);
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_degraded_shape() {
        let result = AggregateResult::degraded(DOC, "remote service unavailable");
        assert_eq!(result.summary, DEGRADED_SUMMARY);
        assert_eq!(result.sentiment, SentimentResult::degraded());
        assert!(result.qa.is_empty());
        assert_eq!(result.metadata.word_count, 5);
        assert_eq!(result.metadata.questions_answered, 0);
        assert!(result.is_degraded());
    }

    #[test]
    fn test_metadata_error_skipped_when_absent() {
        let summary = SummaryResult::from_generated(DOC, "ok");
        let result = AggregateResult::assemble(summary, SentimentResult::fallback(), vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["metadata"].get("error").is_none());

        let degraded = serde_json::to_value(AggregateResult::degraded(DOC, "boom")).unwrap();
        assert_eq!(degraded["metadata"]["error"], "boom");
    }
}
