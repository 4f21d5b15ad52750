//! Analysis task identifiers

use serde::{Deserialize, Serialize};

/// One of the three independent analysis tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Multi-section summary of the full document
    Summary,
    /// Single-word sentiment classification
    Sentiment,
    /// Per-question answers
    Qa,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Summary, TaskKind::Sentiment, TaskKind::Qa];

    pub fn as_str(&self) -> &str {
        match self {
            TaskKind::Summary => "summary",
            TaskKind::Sentiment => "sentiment",
            TaskKind::Qa => "qa",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            TaskKind::Summary => "Summary",
            TaskKind::Sentiment => "Sentiment",
            TaskKind::Qa => "Q&A",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
