//! Wire types for the completion endpoint.
//!
//! Only the fields the adapter reads are modelled; everything else in the
//! response body is ignored.

use analyst_application::TransportError;
use serde::Deserialize;

/// Completion response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// Extract the trimmed text of the first choice.
pub(crate) fn extract_text(body: &str) -> Result<String, TransportError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text.trim().to_string())
        .ok_or_else(|| TransportError::MalformedResponse("response has no choices".to_string()))
}
