//! Analysis parameters - per-task sizing and Coordinator limits.

use std::time::Duration;

/// Sizing and concurrency parameters shared by the three tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisParams {
    /// Trimmed character count below which the summary is refused.
    pub min_summary_chars: usize,
    /// Requested summary length; the output budget is four tokens per unit.
    pub summary_length: u32,
    /// Leading words sent to the sentiment prompt.
    pub sentiment_context_words: usize,
    /// Leading words shared as context by every question.
    pub qa_context_words: usize,
    /// Questions in flight at once.
    pub qa_concurrency: usize,
    /// Total budget for one analysis. `None` waits for every task.
    pub timeout: Option<Duration>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            min_summary_chars: 50,
            summary_length: 1000,
            sentiment_context_words: 500,
            qa_context_words: 1000,
            qa_concurrency: 4,
            timeout: None,
        }
    }
}

impl AnalysisParams {
    // ==================== Builder Methods ====================

    pub fn with_min_summary_chars(mut self, chars: usize) -> Self {
        self.min_summary_chars = chars;
        self
    }

    pub fn with_summary_length(mut self, length: u32) -> Self {
        self.summary_length = length;
        self
    }

    pub fn with_sentiment_context_words(mut self, words: usize) -> Self {
        self.sentiment_context_words = words;
        self
    }

    pub fn with_qa_context_words(mut self, words: usize) -> Self {
        self.qa_context_words = words;
        self
    }

    /// Zero is raised to one.
    pub fn with_qa_concurrency(mut self, concurrency: usize) -> Self {
        self.qa_concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Output token budget requested by the summary task.
    pub fn summary_max_tokens(&self) -> u32 {
        self.summary_length.saturating_mul(4)
    }
}
