//! Catalog compatibility validation.

use crate::script::ComicScript;
use fumetto_catalog::Catalog;
use fumetto_error::{CompatError, CompatErrorKind, FumettoResult};

/// Check every character reference in `script` against the catalog.
///
/// Validation is fail-closed: any unknown identity, unsupported angle,
/// pose, emotion, or customization value rejects the whole script. Nothing
/// is coerced or dropped; the error names the offending field so the
/// planner can be re-prompted with it.
///
/// # Errors
///
/// Returns a compatibility error for the first incompatible reference.
#[tracing::instrument(skip_all)]
pub fn validate_script(script: &ComicScript, catalog: &Catalog) -> FumettoResult<()> {
    for panel in &script.panels {
        for reference in &panel.characters {
            let definition = catalog.definition_of(&reference.character).ok_or_else(|| {
                CompatError::new(CompatErrorKind::UnknownCharacter(reference.character.clone()))
            })?;

            if let Some(angle) = &reference.angle {
                if definition.is_front_only() {
                    return Err(CompatError::new(CompatErrorKind::AngleOnFrontOnly {
                        character: reference.character.clone(),
                        angle: angle.clone(),
                    })
                    .into());
                }
                if !definition.supports_angle(angle) {
                    return Err(CompatError::new(CompatErrorKind::UnsupportedAngle {
                        character: reference.character.clone(),
                        angle: angle.clone(),
                    })
                    .into());
                }
            }

            if let Some(pose) = &reference.pose {
                if !definition.supports_pose(pose) {
                    return Err(CompatError::new(CompatErrorKind::UnsupportedPose {
                        character: reference.character.clone(),
                        pose: pose.clone(),
                    })
                    .into());
                }
            }

            if let Some(emotion) = &reference.emotion {
                if !definition.supports_emotion(emotion) {
                    return Err(CompatError::new(CompatErrorKind::UnsupportedEmotion {
                        character: reference.character.clone(),
                        emotion: emotion.clone(),
                    })
                    .into());
                }
            }

            for (axis, value) in &reference.customization {
                let Some(allowed) = definition.axis_values(axis) else {
                    return Err(CompatError::new(CompatErrorKind::UnknownAxis {
                        character: reference.character.clone(),
                        axis: axis.clone(),
                    })
                    .into());
                };
                if !allowed.iter().any(|v| v == value) {
                    return Err(CompatError::new(CompatErrorKind::UnsupportedAxisValue {
                        character: reference.character.clone(),
                        axis: axis.clone(),
                        value: value.clone(),
                    })
                    .into());
                }
            }
        }
    }

    tracing::debug!("Script passed catalog validation");
    Ok(())
}
