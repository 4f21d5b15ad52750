//! Console output formatter for analysis results

use analyst_domain::{AggregateResult, Sentiment};
use colored::{ColoredString, Colorize};

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete analysis result
    pub fn format(result: &AggregateResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Document Analysis"));
        output.push('\n');

        if let Some(error) = &result.metadata.error {
            output.push_str(&format!("\n{} {}\n", "Analysis degraded:".red().bold(), error));
        }

        // Summary
        output.push_str(&Self::section_header("Summary"));
        output.push('\n');
        output.push_str(result.summary.trim_end());
        output.push('\n');

        // Sentiment
        output.push_str(&Self::section_header("Sentiment"));
        output.push_str(&format!(
            "\n{} (confidence {:.2})\n",
            Self::sentiment_label(&result.sentiment.sentiment),
            result.sentiment.confidence
        ));

        // Q&A (if any)
        if !result.qa.is_empty() {
            output.push_str(&Self::section_header("Questions & Answers"));
            for (i, pair) in result.qa.iter().enumerate() {
                let heading = format!("Q{}: {}", i + 1, pair.question);
                let heading = if pair.is_answered() {
                    heading.yellow().bold()
                } else {
                    heading.red().bold()
                };
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    heading,
                    Self::indent(pair.answer.trim(), "  ")
                ));
            }
        }

        // Metadata
        output.push_str(&Self::section_header("Metadata"));
        output.push_str(&format!(
            "\n{} {}\n{} {}\n{} {}\n",
            "Words:".dimmed(),
            result.metadata.word_count,
            "Summary length:".dimmed(),
            result.metadata.summary_length,
            "Questions answered:".dimmed(),
            result.metadata.questions_answered
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &AggregateResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format summary only (concise output)
    pub fn format_summary_only(result: &AggregateResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Summary ===".cyan().bold()));
        output.push_str(result.summary.trim_end());
        output.push('\n');

        if let Some(error) = &result.metadata.error {
            output.push_str(&format!("\n{} {}\n", "Error:".red().bold(), error));
        }

        output
    }

    fn sentiment_label(sentiment: &Sentiment) -> ColoredString {
        match sentiment {
            Sentiment::Positive => sentiment.as_str().green().bold(),
            Sentiment::Negative => sentiment.as_str().red().bold(),
            Sentiment::Neutral => sentiment.as_str().yellow().bold(),
            Sentiment::Other(raw) => raw.as_str().normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
