//! JSONL file writer for analysis events.
//!
//! Each observer event is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use analyst_application::AnalysisObserver;
use analyst_domain::TaskKind;
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::warn;

/// JSONL call logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlCallLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlCallLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create call log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create call log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn log(&self, event_type: &str, payload: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match payload {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert("type".to_string(), Value::String(event_type.to_string()));
        record.insert("timestamp".to_string(), Value::String(timestamp));

        let Ok(line) = serde_json::to_string(&Value::Object(record)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl AnalysisObserver for JsonlCallLogger {
    fn on_analysis_start(&self, question_count: usize) {
        self.log("analysis_start", json!({ "question_count": question_count }));
    }

    fn on_task_start(&self, task: TaskKind) {
        self.log("task_start", json!({ "task": task }));
    }

    fn on_call_start(&self, task: TaskKind, attempt: u32) {
        self.log("call_start", json!({ "task": task, "attempt": attempt }));
    }

    fn on_retry(&self, task: TaskKind, attempt: u32, reason: &str, delay: Duration) {
        self.log(
            "retry",
            json!({
                "task": task,
                "attempt": attempt,
                "reason": reason,
                "delay_ms": delay.as_millis() as u64,
            }),
        );
    }

    fn on_call_finish(&self, task: TaskKind, attempts: u32, success: bool) {
        self.log(
            "call_finish",
            json!({ "task": task, "attempts": attempts, "success": success }),
        );
    }

    fn on_task_complete(&self, task: TaskKind, success: bool) {
        self.log("task_complete", json!({ "task": task, "success": success }));
    }

    fn on_analysis_complete(&self, degraded: bool) {
        self.log("analysis_complete", json!({ "degraded": degraded }));
    }
}

impl Drop for JsonlCallLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
