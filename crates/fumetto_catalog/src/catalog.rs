//! The immutable catalog table.

use crate::definition::CharacterDefinition;
use crate::roster;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// The full set of playable characters, keyed by identity.
///
/// Built once with [`Catalog::builtin`] and shared by reference for the
/// lifetime of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    characters: BTreeMap<String, CharacterDefinition>,
}

impl Catalog {
    /// The builtin roster shipped with the library.
    pub fn builtin() -> Self {
        Self::from_definitions(roster::builtin_definitions())
    }

    /// Build a catalog from an explicit list of definitions.
    pub fn from_definitions(definitions: Vec<CharacterDefinition>) -> Self {
        let characters = definitions
            .into_iter()
            .map(|d| (d.key().clone(), d))
            .collect();
        Self { characters }
    }

    /// Look up a character by identity key.
    pub fn definition_of(&self, key: &str) -> Option<&CharacterDefinition> {
        self.characters.get(key)
    }

    /// Whether the catalog contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.characters.contains_key(key)
    }

    /// Whether `key` exists and supports `angle`.
    pub fn supports_angle(&self, key: &str, angle: &str) -> bool {
        self.definition_of(key)
            .map(|d| d.supports_angle(angle))
            .unwrap_or(false)
    }

    /// Whether `key` exists and supports `pose`.
    pub fn supports_pose(&self, key: &str, pose: &str) -> bool {
        self.definition_of(key)
            .map(|d| d.supports_pose(pose))
            .unwrap_or(false)
    }

    /// Number of characters in the catalog.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over definitions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.values()
    }

    /// A compact plain-text roster listing for embedding in planner prompts.
    ///
    /// Lists each character with its blurb and allowed vocabularies so the
    /// planner only ever sees legal choices.
    pub fn roster_brief(&self) -> String {
        let mut brief = String::new();
        for def in self.characters.values() {
            let _ = writeln!(brief, "- {}: {}", def.key(), def.blurb());
            if def.is_front_only() {
                let _ = writeln!(brief, "  angles: none (front view only, omit angle)");
            } else {
                let _ = writeln!(brief, "  angles: {}", def.angles().join(", "));
            }
            let _ = writeln!(brief, "  poses: {}", def.poses().join(", "));
            let _ = writeln!(brief, "  emotions: {}", def.emotions().join(", "));
            for (axis, values) in def.axes() {
                let _ = writeln!(brief, "  axis {}: {}", axis, values.join(", "));
            }
        }
        brief
    }
}
