//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for analysis results
///
/// This is a domain concept representing how the aggregate should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every section: summary, sentiment, Q&A and metadata (default)
    #[default]
    Full,
    /// Only the summary text
    Summary,
    /// JSON output
    Json,
}
