//! Top-level error wrapper types.

use crate::{
    AssetError, CollaboratorError, CompatError, ConfigError, JsonError, PipelineError, SchemaError,
};

/// The foundation error enum for the Fumetto workspace.
///
/// # Examples
///
/// ```
/// use fumetto_error::{FumettoError, ConfigError};
///
/// let cfg_err = ConfigError::new("missing model name");
/// let err: FumettoError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FumettoErrorKind {
    /// Planner output malformed
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Character/angle/pose mismatch against the catalog
    #[from(CompatError)]
    Compat(CompatError),
    /// Character artwork could not be produced or found
    #[from(AssetError)]
    Asset(AssetError),
    /// External collaborator failure
    #[from(CollaboratorError)]
    Collaborator(CollaboratorError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Pipeline control-flow error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

impl FumettoErrorKind {
    /// Check whether the underlying failure is transient.
    ///
    /// Only collaborator-level faults are ever transient; schema and
    /// compatibility failures are handled by the re-planning loop, not by
    /// blind retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            FumettoErrorKind::Collaborator(e) => e.kind.is_retryable(),
            _ => false,
        }
    }
}

/// Fumetto error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fumetto_error::{FumettoResult, ConfigError};
///
/// fn might_fail() -> FumettoResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fumetto Error: {}", _0)]
pub struct FumettoError(Box<FumettoErrorKind>);

impl FumettoError {
    /// Create a new error from a kind.
    pub fn new(kind: FumettoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FumettoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FumettoErrorKind
impl<T> From<T> for FumettoError
where
    T: Into<FumettoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fumetto operations.
///
/// # Examples
///
/// ```
/// use fumetto_error::{FumettoResult, JsonError};
///
/// fn decode() -> FumettoResult<String> {
///     Err(JsonError::new("unexpected end of input"))?
/// }
/// ```
pub type FumettoResult<T> = std::result::Result<T, FumettoError>;
