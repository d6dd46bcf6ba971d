//! The composed document and its parts.

use fumetto_error::{FumettoResult, JsonError};
use fumetto_script::Signature;
use serde::{Deserialize, Serialize};

/// One positioned character asset inside a panel.
///
/// `x` and `y` locate the bottom center of the figure, so feet land on the
/// same ground line regardless of asset height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Which asset to draw
    pub signature: Signature,
    /// Horizontal bottom-center anchor
    pub x: f64,
    /// Vertical bottom-center anchor (the ground line)
    pub y: f64,
    /// Rendered figure height; width follows from the asset's aspect ratio
    pub scale: f64,
    /// Flip horizontally around the anchor
    pub mirror: bool,
}

/// A dialogue bubble anchored above its speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleAnchor {
    /// Wrapped dialogue text, one entry per line
    pub lines: Vec<String>,
    /// Horizontal anchor, matching the speaker's slot
    pub x: f64,
    /// Vertical anchor, measured from the panel top
    pub y: f64,
}

/// One fully laid out panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Scene description, passed through from the script unchanged
    pub background: String,
    /// Positioned character assets, left to right as authored
    pub placements: Vec<Placement>,
    /// Dialogue bubbles in speaking order
    pub bubbles: Vec<BubbleAnchor>,
}

/// The pipeline's terminal artifact: three laid out panels plus headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDocument {
    /// Comic title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Comic subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// The panels in reading order
    pub panels: Vec<PanelLayout>,
}

impl FinalDocument {
    /// Serialize for handoff to a rendering collaborator.
    ///
    /// # Errors
    ///
    /// Returns a JSON error when serialization fails.
    pub fn to_json_pretty(&self) -> FumettoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| JsonError::from(e).into())
    }
}
