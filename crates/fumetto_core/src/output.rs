//! Output types from collaborator responses.

use serde::{Deserialize, Serialize};

/// Supported output types from creative collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output (scripts, markup, prose).
    Text(String),

    /// Structured JSON output from providers with a native JSON mode.
    Json(serde_json::Value),
}

impl Output {
    /// Borrow the text content, if this output carries any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Json(_) => None,
        }
    }
}
