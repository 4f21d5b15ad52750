//! Completion request value object

use crate::core::model::Model;
use serde::Serialize;

/// Body of one non-streaming completion call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: Model,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

impl CompletionRequest {
    pub fn new(model: Model, prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            max_tokens,
            temperature,
            stream: false,
        }
    }

    /// Returns a copy with `max_tokens` capped at `limit`.
    pub fn with_token_cap(mut self, limit: u32) -> Self {
        self.max_tokens = self.max_tokens.min(limit);
        self
    }
}
