//! Analysis request value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A document plus the questions to answer about it (Value Object)
///
/// Immutable once built. The text is guaranteed non-blank; the question list
/// may be empty and keeps the caller's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    text: String,
    questions: Vec<String>,
}

impl AnalysisRequest {
    /// Create a new request, rejecting blank text.
    pub fn new(text: impl Into<String>, questions: Vec<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText);
        }
        Ok(Self { text, questions })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Number of characters in the trimmed text.
    pub fn char_len(&self) -> usize {
        self.text.trim().chars().count()
    }
}
