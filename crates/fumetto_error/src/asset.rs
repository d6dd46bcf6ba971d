//! Character asset errors.

/// Specific error conditions for character artwork.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AssetErrorKind {
    /// Generation retries exhausted for one signature
    #[display("Could not illustrate character '{}' after {} attempts", signature, attempts)]
    GenerationExhausted {
        /// Display form of the character signature
        signature: String,
        /// Attempts made before giving up
        attempts: usize,
    },
    /// The studio returned markup that is not usable artwork
    #[display("Unusable artwork for '{}': {}", signature, reason)]
    UnusableMarkup {
        /// Display form of the character signature
        signature: String,
        /// Why the markup was rejected
        reason: String,
    },
    /// An asset was missing at composition time. This indicates a controller
    /// bug, not a user-facing condition.
    #[display("No asset cached for signature '{}'", _0)]
    MissingAsset(String),
}

/// Error type for asset generation and lookup.
///
/// # Examples
///
/// ```
/// use fumetto_error::{AssetError, AssetErrorKind};
///
/// let err = AssetError::new(AssetErrorKind::MissingAsset("bill".to_string()));
/// assert!(format!("{}", err).contains("bill"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Asset Error: {} at line {} in {}", kind, line, file)]
pub struct AssetError {
    /// The specific error condition
    pub kind: AssetErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AssetError {
    /// Create a new AssetError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
