//! Progress reporting contract.
//!
//! The pipeline emits an ordered sequence of `(stage, status, detail)`
//! events during a run. External UI/log collaborators consume them through
//! the [`ProgressSink`] trait; [`ProgressLog`] is a Vec-backed sink for
//! tests and the CLI.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Pipeline stages, in execution order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Stage {
    /// Turning the topic into a candidate script
    Planning,
    /// Checking every character reference against the catalog
    Validating,
    /// Producing one asset per unique character signature
    GeneratingAssets,
    /// Assembling panels into the final document
    Compositing,
    /// Terminal success state
    Done,
    /// Terminal failure state
    Failed,
}

/// Status carried by a progress event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum ProgressStatus {
    /// The stage began work
    Started,
    /// The stage finished successfully
    Completed,
    /// The stage failed
    Failed,
    /// Intermediate detail (e.g., one asset generated)
    Detail,
}

/// One entry in the ordered progress sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Stage the event belongs to
    pub stage: Stage,
    /// What happened
    pub status: ProgressStatus,
    /// Human-readable detail; empty for bare transitions
    pub detail: String,
}

impl ProgressEvent {
    /// Build an event.
    pub fn new(stage: Stage, status: ProgressStatus, detail: impl Into<String>) -> Self {
        Self {
            stage,
            status,
            detail: detail.into(),
        }
    }
}

/// Consumer of progress events.
///
/// Implementations must be cheap and non-blocking; the pipeline calls
/// `emit` inline between collaborator calls.
pub trait ProgressSink: Send + Sync {
    /// Receive one event.
    fn emit(&self, event: ProgressEvent);
}

/// Vec-backed sink used by tests and the CLI.
#[derive(Debug, Default)]
pub struct ProgressLog {
    events: Mutex<Vec<ProgressEvent>>,
}

impl ProgressLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the events emitted so far.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("progress log poisoned").clone()
    }
}

impl ProgressSink for ProgressLog {
    fn emit(&self, event: ProgressEvent) {
        self.events.lock().expect("progress log poisoned").push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_emission_order() {
        let log = ProgressLog::new();
        log.emit(ProgressEvent::new(Stage::Planning, ProgressStatus::Started, ""));
        log.emit(ProgressEvent::new(Stage::Planning, ProgressStatus::Completed, ""));

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].status, ProgressStatus::Started);
        assert_eq!(events[1].status, ProgressStatus::Completed);
    }

    #[test]
    fn stage_displays_by_name() {
        assert_eq!(Stage::GeneratingAssets.to_string(), "GeneratingAssets");
    }
}
