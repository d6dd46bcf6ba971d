//! Panel layout constants.

use serde::{Deserialize, Serialize};

/// Width in columns at which dialogue text wraps inside a bubble.
pub const BUBBLE_WRAP_WIDTH: usize = 20;

/// The fixed geometry every panel is laid out against.
///
/// Coordinates are in abstract layout units with the origin at the top
/// left; a rendering collaborator maps them onto whatever raster tier it
/// chooses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Panel width
    pub width: f64,
    /// Panel height
    pub height: f64,
    /// Fraction of panel height a standing figure occupies
    pub figure_height_fraction: f64,
    /// Distance from the panel top to the first bubble anchor
    pub bubble_top_offset: f64,
    /// Extra vertical drop applied to the second character's bubble
    pub bubble_stagger: f64,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 500.0,
            figure_height_fraction: 0.62,
            bubble_top_offset: 40.0,
            bubble_stagger: 70.0,
        }
    }
}
