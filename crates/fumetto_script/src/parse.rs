//! Parsing planner output into a structurally valid script.

use crate::extraction::extract_json;
use crate::script::{ComicScript, PANEL_COUNT};
use fumetto_error::{FumettoResult, SchemaError, SchemaErrorKind};

/// Parse raw planner output into a [`ComicScript`].
///
/// Extraction, deserialization, and structural checks all happen here so a
/// script that comes back `Ok` is guaranteed well-formed: exactly three
/// panels, one or two characters each, every dialogue line attributed to a
/// staged character, no blank backgrounds or dialogue.
///
/// Catalog compatibility is a separate pass; see
/// [`validate_script`](crate::validate_script).
///
/// # Errors
///
/// Returns a schema error naming the first violated rule.
pub fn parse_script(response: &str) -> FumettoResult<ComicScript> {
    let json = extract_json(response)?;
    let script: ComicScript = serde_json::from_str(&json).map_err(|e| {
        let preview = json.chars().take(100).collect::<String>();
        tracing::error!(error = %e, json_preview = %preview, "Script deserialization failed");
        SchemaError::new(SchemaErrorKind::Deserialize(e.to_string()))
    })?;
    check_structure(&script)?;
    Ok(script)
}

fn check_structure(script: &ComicScript) -> FumettoResult<()> {
    if script.panels.len() != PANEL_COUNT {
        return Err(SchemaError::new(SchemaErrorKind::PanelCount(script.panels.len())).into());
    }

    for (index, panel) in script.panels.iter().enumerate() {
        if panel.background.trim().is_empty() {
            return Err(SchemaError::new(SchemaErrorKind::EmptyBackground(index)).into());
        }

        let count = panel.characters.len();
        if !(1..=2).contains(&count) {
            return Err(
                SchemaError::new(SchemaErrorKind::CharacterCount { panel: index, count }).into(),
            );
        }

        for line in &panel.dialogue {
            if line.text.trim().is_empty() {
                return Err(SchemaError::new(SchemaErrorKind::EmptyDialogue(index)).into());
            }
            if line.speaker >= count {
                return Err(SchemaError::new(SchemaErrorKind::SpeakerOutOfRange {
                    panel: index,
                    speaker: line.speaker,
                    count,
                })
                .into());
            }
        }
    }

    Ok(())
}
