//! Errors from external creative collaborators.

/// Specific error conditions for collaborator calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CollaboratorErrorKind {
    /// API key not found in the environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to construct the HTTP client
    #[display("Failed to create collaborator client: {}", _0)]
    ClientCreation(String),
    /// The call did not complete within the configured deadline
    #[display("Collaborator call timed out after {}s", _0)]
    Timeout(u64),
    /// Transport-level failure reaching the collaborator
    #[display("Collaborator unavailable: {}", _0)]
    Unavailable(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The collaborator answered with no usable output
    #[display("Collaborator returned an empty response")]
    EmptyResponse,
    /// Response body could not be decoded
    #[display("Malformed collaborator response: {}", _0)]
    MalformedResponse(String),
}

impl CollaboratorErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            CollaboratorErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            CollaboratorErrorKind::Timeout(_) => true,
            CollaboratorErrorKind::Unavailable(_) => true,
            CollaboratorErrorKind::EmptyResponse => true,
            _ => false,
        }
    }
}

/// Collaborator error with source location tracking.
///
/// # Examples
///
/// ```
/// use fumetto_error::{CollaboratorError, CollaboratorErrorKind};
///
/// let err = CollaboratorError::new(CollaboratorErrorKind::Timeout(30));
/// assert!(err.kind.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Collaborator Error: {} at line {} in {}", kind, line, file)]
pub struct CollaboratorError {
    /// The kind of error that occurred
    pub kind: CollaboratorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CollaboratorError {
    /// Create a new CollaboratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CollaboratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
