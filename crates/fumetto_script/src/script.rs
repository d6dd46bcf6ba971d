//! Script and panel types.

use crate::reference::{CharacterReference, Signature};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Every comic has exactly this many panels.
pub const PANEL_COUNT: usize = 3;

/// One spoken line, attributed to a staged character by slot index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Zero-based index into the panel's character list
    pub speaker: usize,
    /// The spoken text
    pub text: String,
}

/// A single panel: a scene, its characters, and what they say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Scene description rendered behind the characters
    pub background: String,
    /// One or two staged characters
    pub characters: Vec<CharacterReference>,
    /// Dialogue in speaking order
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
}

/// A complete three-panel comic script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicScript {
    /// Comic title, shown above the strip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One-line subtitle under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// The panels, in reading order
    pub panels: Vec<Panel>,
}

impl ComicScript {
    /// The distinct asset signatures this script requires, in first
    /// appearance order.
    ///
    /// Generation fans out over this list, so a character repeated across
    /// panels with identical staging costs one asset call.
    pub fn signatures(&self) -> Vec<Signature> {
        let mut seen = BTreeSet::new();
        let mut signatures = Vec::new();
        for panel in &self.panels {
            for reference in &panel.characters {
                let sig = reference.signature();
                if seen.insert(sig.clone()) {
                    signatures.push(sig);
                }
            }
        }
        signatures
    }
}
