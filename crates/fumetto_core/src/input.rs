//! Input types for collaborator requests.

use serde::{Deserialize, Serialize};

/// Supported input types to creative collaborators.
///
/// The pipeline only ever sends text: prompts, roster briefs, and advisory
/// context extracted from uploaded documents.
///
/// # Examples
///
/// ```
/// use fumetto_core::Input;
///
/// let prompt = Input::Text("Draw a coffee mug".to_string());
/// assert!(matches!(prompt, Input::Text(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}
