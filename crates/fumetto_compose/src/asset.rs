//! Generated artwork descriptors.

use fumetto_error::{AssetError, AssetErrorKind, FumettoResult};
use fumetto_script::Signature;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Padding fraction the visual contract asks generators to leave around
/// the figure.
pub const PADDING_FRACTION: f64 = 0.08;

/// Minimum stroke width the visual contract asks generators to use.
pub const MIN_STROKE_WIDTH: f64 = 3.0;

/// One piece of generated character artwork plus the metadata composition
/// needs.
///
/// The markup is vector (SVG) with a transparent background and the figure's
/// feet near the canvas bottom, so composition can scale by panel height and
/// ground-align every placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAsset {
    /// The signature this artwork renders
    pub signature: Signature,
    /// Vector markup
    pub markup: String,
    /// Canvas width divided by height
    pub aspect_ratio: f64,
    /// Declared empty margin around the figure
    pub padding_fraction: f64,
    /// Declared stroke width
    pub stroke_width: f64,
    /// Whether the canvas background is transparent
    pub transparent: bool,
}

fn viewbox_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"viewBox\s*=\s*"\s*[\d.+-]+\s+[\d.+-]+\s+([\d.+-]+)\s+([\d.+-]+)\s*""#)
            .expect("viewBox pattern is valid")
    })
}

impl CharacterAsset {
    /// Build an asset from raw generator markup.
    ///
    /// The aspect ratio comes from the markup's `viewBox` declaration.
    /// Markup without a usable viewBox cannot be ground-aligned, so it is
    /// rejected rather than guessed at.
    ///
    /// # Errors
    ///
    /// Returns an asset error when the markup carries no parseable viewBox
    /// or declares a degenerate canvas.
    pub fn from_markup(signature: &Signature, markup: String) -> FumettoResult<Self> {
        let captures = viewbox_pattern().captures(&markup).ok_or_else(|| {
            AssetError::new(AssetErrorKind::UnusableMarkup {
                signature: signature.to_string(),
                reason: "no viewBox declaration".to_string(),
            })
        })?;

        let parse = |index: usize| -> f64 {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0.0)
        };
        let (width, height) = (parse(1), parse(2));
        if width <= 0.0 || height <= 0.0 {
            return Err(AssetError::new(AssetErrorKind::UnusableMarkup {
                signature: signature.to_string(),
                reason: format!("degenerate viewBox {width}x{height}"),
            })
            .into());
        }

        Ok(Self {
            signature: signature.clone(),
            markup,
            aspect_ratio: width / height,
            padding_fraction: PADDING_FRACTION,
            stroke_width: MIN_STROKE_WIDTH,
            transparent: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn signature() -> Signature {
        Signature {
            character: "bill".to_string(),
            angle: None,
            pose: Some("shrug".to_string()),
            emotion: Some("happy".to_string()),
            customization: BTreeMap::new(),
        }
    }

    #[test]
    fn aspect_ratio_comes_from_viewbox() {
        let markup = r#"<svg viewBox="0 0 300 500"><g/></svg>"#.to_string();
        let asset = CharacterAsset::from_markup(&signature(), markup).unwrap();
        assert!((asset.aspect_ratio - 0.6).abs() < 1e-9);
        assert!(asset.transparent);
    }

    #[test]
    fn missing_viewbox_is_rejected() {
        let err =
            CharacterAsset::from_markup(&signature(), "<svg><g/></svg>".to_string()).unwrap_err();
        assert!(format!("{err}").contains("no viewBox"));
    }

    #[test]
    fn zero_height_viewbox_is_rejected() {
        let markup = r#"<svg viewBox="0 0 300 0"/>"#.to_string();
        let err = CharacterAsset::from_markup(&signature(), markup).unwrap_err();
        assert!(format!("{err}").contains("degenerate"));
    }
}
