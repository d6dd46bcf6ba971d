//! The composition pass.

use crate::asset::CharacterAsset;
use crate::document::{BubbleAnchor, FinalDocument, PanelLayout, Placement};
use crate::geometry::{PanelGeometry, BUBBLE_WRAP_WIDTH};
use fumetto_error::{AssetError, AssetErrorKind, FumettoResult};
use fumetto_script::{ComicScript, Panel, Signature};
use std::collections::BTreeMap;

/// Assemble a validated script and its generated assets into a
/// [`FinalDocument`].
///
/// Layout rules: two characters split into left and right slots, a single
/// character is centered; every figure scales to the same fraction of the
/// panel height and stands on the ground line; bubbles sit above their
/// speaker's slot, with the second character's bubble dropped by a fixed
/// stagger so two bubbles never overlap.
///
/// # Errors
///
/// Fails only when `assets` lacks a signature the script references, which
/// means the caller skipped or lost part of the generation fan-out.
#[tracing::instrument(skip_all)]
pub fn compose(
    script: &ComicScript,
    assets: &BTreeMap<Signature, CharacterAsset>,
    geometry: &PanelGeometry,
) -> FumettoResult<FinalDocument> {
    let panels = script
        .panels
        .iter()
        .map(|panel| compose_panel(panel, assets, geometry))
        .collect::<FumettoResult<Vec<_>>>()?;

    tracing::debug!(panels = panels.len(), "Composition complete");
    Ok(FinalDocument {
        title: script.title.clone(),
        subtitle: script.subtitle.clone(),
        panels,
    })
}

fn compose_panel(
    panel: &Panel,
    assets: &BTreeMap<Signature, CharacterAsset>,
    geometry: &PanelGeometry,
) -> FumettoResult<PanelLayout> {
    let slots = slot_centers(panel.characters.len(), geometry);

    let mut placements = Vec::with_capacity(panel.characters.len());
    for (reference, &x) in panel.characters.iter().zip(&slots) {
        let signature = reference.signature();
        let asset = assets.get(&signature).ok_or_else(|| {
            AssetError::new(AssetErrorKind::MissingAsset(signature.to_string()))
        })?;

        // Renderers draw the asset normalized to unit height, so the scale
        // is the rendered height and width follows from the aspect ratio.
        let scale = geometry.height * geometry.figure_height_fraction;
        let half_width = scale * asset.aspect_ratio * 0.5;
        placements.push(Placement {
            signature,
            x: x.clamp(half_width, geometry.width - half_width),
            y: geometry.height,
            scale,
            mirror: reference.mirror,
        });
    }

    let bubbles = panel
        .dialogue
        .iter()
        .map(|line| BubbleAnchor {
            lines: textwrap::wrap(&line.text, BUBBLE_WRAP_WIDTH)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            x: slots[line.speaker],
            y: geometry.bubble_top_offset + line.speaker as f64 * geometry.bubble_stagger,
        })
        .collect();

    Ok(PanelLayout {
        background: panel.background.clone(),
        placements,
        bubbles,
    })
}

/// Horizontal bottom-center anchors for each character slot.
fn slot_centers(count: usize, geometry: &PanelGeometry) -> Vec<f64> {
    match count {
        1 => vec![geometry.width * 0.5],
        _ => vec![geometry.width * 0.25, geometry.width * 0.75],
    }
}
