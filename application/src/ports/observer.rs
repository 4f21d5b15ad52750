//! Analysis observer port
//!
//! Hook called at well-defined points of an analysis. Observers never
//! influence control flow; every method defaults to a no-op.

use analyst_domain::TaskKind;
use std::sync::Arc;
use std::time::Duration;

/// Callback for analysis lifecycle events
pub trait AnalysisObserver: Send + Sync {
    /// Called once before the tasks are dispatched
    fn on_analysis_start(&self, _question_count: usize) {}

    /// Called when a task begins
    fn on_task_start(&self, _task: TaskKind) {}

    /// Called before each remote attempt (0-indexed)
    fn on_call_start(&self, _task: TaskKind, _attempt: u32) {}

    /// Called when an attempt failed and another will follow after `delay`
    fn on_retry(&self, _task: TaskKind, _attempt: u32, _reason: &str, _delay: Duration) {}

    /// Called when a remote call settles
    fn on_call_finish(&self, _task: TaskKind, _attempts: u32, _success: bool) {}

    /// Called when a task settles
    fn on_task_complete(&self, _task: TaskKind, _success: bool) {}

    /// Called once with the final result shape
    fn on_analysis_complete(&self, _degraded: bool) {}
}

/// No-op observer for when events are not needed
pub struct NoObserver;

impl AnalysisObserver for NoObserver {}

/// An observer that forwards every event to several inner observers.
///
/// ```text
/// AnalyzeDocumentUseCase / ResilientCaller
///                  |
///        CompositeObserver
///         +--------+---------+
///         |                  |
///  ProgressReporter    JsonlCallLogger
/// ```
#[derive(Default)]
pub struct CompositeObserver {
    delegates: Vec<Arc<dyn AnalysisObserver>>,
}

impl CompositeObserver {
    pub fn new(delegates: Vec<Arc<dyn AnalysisObserver>>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, observer: Arc<dyn AnalysisObserver>) {
        self.delegates.push(observer);
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

/// Macro to delegate a method call to all inner observers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl AnalysisObserver for CompositeObserver {
    fn on_analysis_start(&self, question_count: usize) {
        delegate!(self, on_analysis_start, question_count);
    }

    fn on_task_start(&self, task: TaskKind) {
        delegate!(self, on_task_start, task);
    }

    fn on_call_start(&self, task: TaskKind, attempt: u32) {
        delegate!(self, on_call_start, task, attempt);
    }

    fn on_retry(&self, task: TaskKind, attempt: u32, reason: &str, delay: Duration) {
        delegate!(self, on_retry, task, attempt, reason, delay);
    }

    fn on_call_finish(&self, task: TaskKind, attempts: u32, success: bool) {
        delegate!(self, on_call_finish, task, attempts, success);
    }

    fn on_task_complete(&self, task: TaskKind, success: bool) {
        delegate!(self, on_task_complete, task, success);
    }

    fn on_analysis_complete(&self, degraded: bool) {
        delegate!(self, on_analysis_complete, degraded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl AnalysisObserver for Recorder {
        fn on_task_start(&self, task: TaskKind) {
            self.events.lock().unwrap().push(format!("start:{}", task.as_str()));
        }

        fn on_retry(&self, task: TaskKind, attempt: u32, _reason: &str, _delay: Duration) {
            self.events
                .lock()
                .unwrap()
                .push(format!("retry:{}:{}", task.as_str(), attempt));
        }
    }

    #[test]
    fn test_composite_fans_out() {
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        let delegates: Vec<Arc<dyn AnalysisObserver>> = vec![a.clone(), b.clone()];
        let composite = CompositeObserver::new(delegates);

        composite.on_task_start(TaskKind::Qa);
        composite.on_retry(TaskKind::Summary, 1, "rate limited", Duration::ZERO);
        composite.on_analysis_complete(false);

        for recorder in [&a, &b] {
            let events = recorder.events.lock().unwrap();
            assert_eq!(*events, vec!["start:qa", "retry:summary:1"]);
        }
    }

    #[test]
    fn test_empty_composite() {
        let mut composite = CompositeObserver::default();
        assert!(composite.is_empty());
        composite.push(Arc::new(NoObserver));
        assert!(!composite.is_empty());
        composite.on_analysis_start(3);
    }
}
