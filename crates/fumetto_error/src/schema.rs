//! Script schema violation errors.

/// Specific ways a planner response can fail schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SchemaErrorKind {
    /// No JSON payload could be located in the response text
    #[display("No JSON found in planner response ({} bytes)", _0)]
    NoJsonFound(usize),
    /// The JSON payload did not deserialize into a script
    #[display("Planner JSON did not match the script shape: {}", _0)]
    Deserialize(String),
    /// Script must contain exactly three panels
    #[display("Script has {} panels, expected exactly 3", _0)]
    PanelCount(usize),
    /// Each panel must stage one or two characters
    #[display("Panel {} has {} characters, expected 1 or 2", panel, count)]
    CharacterCount {
        /// Zero-based panel index
        panel: usize,
        /// Characters staged in that panel
        count: usize,
    },
    /// Dialogue attributed to a character slot that does not exist
    #[display("Panel {} dialogue speaks from slot {} but only {} characters are staged", panel, speaker, count)]
    SpeakerOutOfRange {
        /// Zero-based panel index
        panel: usize,
        /// Offending speaker slot
        speaker: usize,
        /// Characters staged in that panel
        count: usize,
    },
    /// Background descriptor missing or blank
    #[display("Panel {} has an empty background descriptor", _0)]
    EmptyBackground(usize),
    /// Empty dialogue line
    #[display("Panel {} has an empty dialogue line", _0)]
    EmptyDialogue(usize),
}

/// Error raised when generative output does not conform to the script schema.
///
/// # Examples
///
/// ```
/// use fumetto_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::PanelCount(5));
/// assert!(format!("{}", err).contains("5 panels"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// The specific error condition
    pub kind: SchemaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
