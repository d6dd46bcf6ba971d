//! Character compatibility errors.

/// Specific ways a script can reference a character the catalog cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompatErrorKind {
    /// Identity key not present in the catalog
    #[display("Unknown character '{}'", _0)]
    UnknownCharacter(String),
    /// Angle outside the definition's supported set
    #[display("Character '{}' does not support angle '{}'", character, angle)]
    UnsupportedAngle {
        /// Catalog identity key
        character: String,
        /// Offending angle
        angle: String,
    },
    /// Angle supplied for a front-only character
    #[display("Character '{}' is front-only but an angle '{}' was supplied", character, angle)]
    AngleOnFrontOnly {
        /// Catalog identity key
        character: String,
        /// Offending angle
        angle: String,
    },
    /// Pose outside the definition's supported set
    #[display("Character '{}' does not support pose '{}'", character, pose)]
    UnsupportedPose {
        /// Catalog identity key
        character: String,
        /// Offending pose
        pose: String,
    },
    /// Emotion outside the definition's supported set
    #[display("Character '{}' does not support emotion '{}'", character, emotion)]
    UnsupportedEmotion {
        /// Catalog identity key
        character: String,
        /// Offending emotion
        emotion: String,
    },
    /// Customization axis the definition does not declare
    #[display("Character '{}' has no customization axis '{}'", character, axis)]
    UnknownAxis {
        /// Catalog identity key
        character: String,
        /// Offending axis name
        axis: String,
    },
    /// Customization value outside the axis's allowed set
    #[display("Character '{}' axis '{}' does not allow value '{}'", character, axis, value)]
    UnsupportedAxisValue {
        /// Catalog identity key
        character: String,
        /// Axis name
        axis: String,
        /// Offending value
        value: String,
    },
}

/// Error raised when a character reference is incompatible with the catalog.
///
/// Validation is fail-closed: the offending field is never silently dropped.
///
/// # Examples
///
/// ```
/// use fumetto_error::{CompatError, CompatErrorKind};
///
/// let err = CompatError::new(CompatErrorKind::UnknownCharacter("zorp".to_string()));
/// assert!(format!("{}", err).contains("zorp"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Compatibility Error: {} at line {} in {}", kind, line, file)]
pub struct CompatError {
    /// The specific error condition
    pub kind: CompatErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CompatError {
    /// Create a new CompatError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
