//! Pipeline controller errors.

/// Specific error conditions for the pipeline state machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The shared planning/validation retry budget ran out
    #[display("Could not generate a valid script after {} attempts (failed while {})", attempts, stage)]
    RetryBudgetExhausted {
        /// Stage name where the final attempt failed
        stage: String,
        /// Attempts consumed
        attempts: usize,
    },
    /// The request was cancelled before a document was produced
    #[display("Pipeline cancelled during {}", _0)]
    Cancelled(String),
}

/// Error type for pipeline control flow.
///
/// # Examples
///
/// ```
/// use fumetto_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::RetryBudgetExhausted {
///     stage: "Validating".to_string(),
///     attempts: 2,
/// });
/// assert!(format!("{}", err).contains("Validating"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
