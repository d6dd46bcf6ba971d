//! Character asset descriptors and panel composition.
//!
//! The compositor is the only pure stage of the pipeline: given a validated
//! script and one asset per signature, it computes deterministic placements,
//! bubble anchors, and the final document. It makes no external calls and
//! holds no state, so composing the same inputs twice yields identical
//! output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod compose;
mod document;
mod geometry;

pub use asset::{CharacterAsset, MIN_STROKE_WIDTH, PADDING_FRACTION};
pub use compose::compose;
pub use document::{BubbleAnchor, FinalDocument, PanelLayout, Placement};
pub use geometry::PanelGeometry;
