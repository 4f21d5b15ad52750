//! Settled result of a single analysis task.
//!
//! Tasks never let a failure escape as a panic or error; they settle into a
//! [`TaskOutcome`] and the Coordinator decides which fallback value replaces
//! a [`TaskOutcome::Failure`].

use serde::{Deserialize, Serialize};

/// Why a task could not produce its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input rejected before any remote call (e.g. text too short)
    InvalidInput,
    /// The remote endpoint could not be reached at all
    Unavailable,
    /// The remote endpoint answered, but not with usable text
    Remote,
    /// The task aborted unexpectedly (panic or cancelled join)
    Panicked,
}

/// Failure reason carried by [`TaskOutcome::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    pub kind: FailureKind,
    pub reason: String,
}

impl TaskFailure {
    pub fn new(kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidInput, reason)
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Unavailable, reason)
    }

    pub fn remote(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Remote, reason)
    }

    pub fn panicked(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Panicked, reason)
    }
}

impl std::fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Tagged result of one task execution.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome<T> {
    Success(T),
    Failure(TaskFailure),
}

impl<T> TaskOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success(_))
    }

    /// Returns `true` if the task failed because the remote was unreachable.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            TaskOutcome::Failure(TaskFailure {
                kind: FailureKind::Unavailable,
                ..
            })
        )
    }

    pub fn failure(&self) -> Option<&TaskFailure> {
        match self {
            TaskOutcome::Success(_) => None,
            TaskOutcome::Failure(failure) => Some(failure),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TaskOutcome<U> {
        match self {
            TaskOutcome::Success(value) => TaskOutcome::Success(f(value)),
            TaskOutcome::Failure(failure) => TaskOutcome::Failure(failure),
        }
    }

    /// Resolve to the payload, building a fallback from the failure.
    pub fn unwrap_or_else(self, fallback: impl FnOnce(&TaskFailure) -> T) -> T {
        match self {
            TaskOutcome::Success(value) => value,
            TaskOutcome::Failure(failure) => fallback(&failure),
        }
    }
}
