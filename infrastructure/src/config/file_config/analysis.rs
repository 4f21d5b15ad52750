//! Analysis configuration from TOML (`[analysis]` section)

use analyst_application::AnalysisParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw analysis configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    pub min_summary_chars: usize,
    pub summary_length: u32,
    pub sentiment_context_words: usize,
    pub qa_context_words: usize,
    pub qa_concurrency: usize,
    /// Total budget for one analysis in seconds
    pub timeout_secs: Option<u64>,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        let params = AnalysisParams::default();
        Self {
            min_summary_chars: params.min_summary_chars,
            summary_length: params.summary_length,
            sentiment_context_words: params.sentiment_context_words,
            qa_context_words: params.qa_context_words,
            qa_concurrency: params.qa_concurrency,
            timeout_secs: None,
        }
    }
}

impl FileAnalysisConfig {
    pub fn to_params(&self) -> AnalysisParams {
        AnalysisParams::default()
            .with_min_summary_chars(self.min_summary_chars)
            .with_summary_length(self.summary_length)
            .with_sentiment_context_words(self.sentiment_context_words)
            .with_qa_context_words(self.qa_context_words)
            .with_qa_concurrency(self.qa_concurrency)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }
}
