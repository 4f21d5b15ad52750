//! Progress reporting for document analysis

use analyst_application::AnalysisObserver;
use analyst_domain::TaskKind;
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per analysis task
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<TaskKind, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_bar(&self, task: TaskKind, f: impl FnOnce(&ProgressBar)) {
        if let Ok(bars) = self.bars.lock()
            && let Some(bar) = bars.get(&task)
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisObserver for ProgressReporter {
    fn on_analysis_start(&self, question_count: usize) {
        let Ok(mut bars) = self.bars.lock() else {
            return;
        };
        for task in TaskKind::ALL {
            let bar = self.multi.add(ProgressBar::new_spinner());
            bar.set_style(Self::spinner_style());
            bar.set_prefix(format!("{:<10}", task.display_name()));
            let message = match task {
                TaskKind::Qa => format!("waiting ({} questions)", question_count),
                _ => "waiting".to_string(),
            };
            bar.set_message(message);
            bars.insert(task, bar);
        }
    }

    fn on_task_start(&self, task: TaskKind) {
        self.with_bar(task, |bar| {
            bar.enable_steady_tick(Duration::from_millis(100));
            bar.set_message("running...");
        });
    }

    fn on_retry(&self, task: TaskKind, attempt: u32, reason: &str, delay: Duration) {
        self.with_bar(task, |bar| {
            bar.set_message(format!(
                "{} attempt {} failed ({}), retrying in {:?}",
                "!".yellow(),
                attempt + 1,
                reason,
                delay
            ));
        });
    }

    fn on_task_complete(&self, task: TaskKind, success: bool) {
        self.with_bar(task, |bar| {
            let status = if success {
                format!("{} done", "v".green())
            } else {
                format!("{} failed, using fallback", "x".red())
            };
            bar.finish_with_message(status);
        });
    }

    fn on_analysis_complete(&self, degraded: bool) {
        let Ok(bars) = self.bars.lock() else {
            return;
        };
        for bar in bars.values().filter(|bar| !bar.is_finished()) {
            if degraded {
                bar.abandon_with_message(format!("{} aborted", "x".red()));
            } else {
                bar.finish();
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so that stdout carries only the result.
pub struct SimpleProgress;

impl AnalysisObserver for SimpleProgress {
    fn on_analysis_start(&self, question_count: usize) {
        eprintln!(
            "{} {} ({} questions)",
            "->".cyan(),
            "Analyzing document".bold(),
            question_count
        );
    }

    fn on_retry(&self, task: TaskKind, attempt: u32, reason: &str, delay: Duration) {
        eprintln!(
            "  {} {} attempt {} failed ({}), retrying in {:?}",
            "!".yellow(),
            task,
            attempt + 1,
            reason,
            delay
        );
    }

    fn on_task_complete(&self, task: TaskKind, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), task);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), task);
        }
    }

    fn on_analysis_complete(&self, degraded: bool) {
        if degraded {
            eprintln!("{} {}", "x".red(), "Analysis degraded".red());
        }
        eprintln!();
    }
}
