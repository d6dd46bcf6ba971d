//! Character definition entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One catalog entry: an identity and everything it can be asked to do.
///
/// An empty angle set means the character is front-only; references to it
/// must not carry an angle at all.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct CharacterDefinition {
    /// Unique identity key (lowercase, e.g. "bill")
    key: String,
    /// Short visual description, embedded in planner prompts
    blurb: String,
    /// Supported viewing angles; empty for front-only characters
    angles: Vec<String>,
    /// Supported body poses
    poses: Vec<String>,
    /// Supported facial emotions
    emotions: Vec<String>,
    /// Customization axes (axis name -> allowed values)
    axes: BTreeMap<String, Vec<String>>,
}

impl CharacterDefinition {
    /// Build a definition. Used only by the builtin roster and tests.
    pub fn new(
        key: impl Into<String>,
        blurb: impl Into<String>,
        angles: Vec<String>,
        poses: Vec<String>,
        emotions: Vec<String>,
        axes: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            key: key.into(),
            blurb: blurb.into(),
            angles,
            poses,
            emotions,
            axes,
        }
    }

    /// Whether this character can only be drawn from the front.
    pub fn is_front_only(&self) -> bool {
        self.angles.is_empty()
    }

    /// Whether `angle` belongs to this definition's angle set.
    pub fn supports_angle(&self, angle: &str) -> bool {
        self.angles.iter().any(|a| a == angle)
    }

    /// Whether `pose` belongs to this definition's pose set.
    pub fn supports_pose(&self, pose: &str) -> bool {
        self.poses.iter().any(|p| p == pose)
    }

    /// Whether `emotion` belongs to this definition's emotion set.
    pub fn supports_emotion(&self, emotion: &str) -> bool {
        self.emotions.iter().any(|e| e == emotion)
    }

    /// Allowed values for a customization axis, if the axis exists.
    pub fn axis_values(&self, axis: &str) -> Option<&[String]> {
        self.axes.get(axis).map(Vec::as_slice)
    }
}
