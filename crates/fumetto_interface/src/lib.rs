//! Trait definitions for the Fumetto pipeline.
//!
//! This crate provides the driver traits the pipeline calls creative
//! collaborators through, and the progress-event contract consumed by
//! external UI/log collaborators.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod traits;

pub use progress::{ProgressEvent, ProgressLog, ProgressSink, ProgressStatus, Stage};
pub use traits::CreativeDriver;
