//! The asset studio.
//!
//! One artwork is generated per unique signature, concurrently. The
//! fan-out is joined before composition; any signature that exhausts its
//! attempts fails the whole batch, cancelling in-flight siblings.

use crate::config::{ModelSettings, PipelineSettings};
use crate::retry::{call_with_retry, RetryPolicy};
use fumetto_catalog::Catalog;
use fumetto_compose::{CharacterAsset, MIN_STROKE_WIDTH, PADDING_FRACTION};
use fumetto_core::{GenerateRequest, Message, Role};
use fumetto_error::{
    AssetError, AssetErrorKind, CollaboratorError, CollaboratorErrorKind, FumettoError,
    FumettoResult,
};
use fumetto_interface::{CreativeDriver, ProgressEvent, ProgressSink, ProgressStatus, Stage};
use fumetto_script::Signature;
use futures_util::future::try_join_all;
use std::collections::BTreeMap;

/// Generates character artwork through a creative collaborator.
pub struct AssetStudio<'a> {
    driver: &'a dyn CreativeDriver,
    catalog: &'a Catalog,
    settings: &'a ModelSettings,
    policy: RetryPolicy,
    attempts: usize,
}

impl<'a> AssetStudio<'a> {
    /// Build a studio over a driver and the shared catalog.
    pub fn new(
        driver: &'a dyn CreativeDriver,
        catalog: &'a Catalog,
        settings: &'a ModelSettings,
        pipeline: &PipelineSettings,
    ) -> Self {
        Self {
            driver,
            catalog,
            settings,
            policy: RetryPolicy::from(pipeline),
            attempts: pipeline.asset_attempts.max(1),
        }
    }

    /// Generate one asset per signature, concurrently.
    ///
    /// Emits a progress detail event as each asset lands.
    ///
    /// # Errors
    ///
    /// Fails when any signature exhausts its generation attempts. No
    /// partial result is returned; remaining in-flight generations are
    /// dropped.
    #[tracing::instrument(skip_all, fields(signatures = signatures.len()))]
    pub async fn generate_all(
        &self,
        signatures: &[Signature],
        progress: &dyn ProgressSink,
    ) -> FumettoResult<BTreeMap<Signature, CharacterAsset>> {
        let tasks = signatures
            .iter()
            .map(|signature| self.generate_one(signature, progress));
        Ok(try_join_all(tasks).await?.into_iter().collect())
    }

    async fn generate_one(
        &self,
        signature: &Signature,
        progress: &dyn ProgressSink,
    ) -> FumettoResult<(Signature, CharacterAsset)> {
        let mut feedback: Option<FumettoError> = None;
        for attempt in 1..=self.attempts {
            match self.attempt(signature, feedback.as_ref()).await {
                Ok(asset) => {
                    progress.emit(ProgressEvent::new(
                        Stage::GeneratingAssets,
                        ProgressStatus::Detail,
                        format!("asset generated for {signature}"),
                    ));
                    return Ok((signature.clone(), asset));
                }
                Err(e) => {
                    tracing::warn!(signature = %signature, attempt, error = %e, "Asset attempt failed");
                    feedback = Some(e);
                }
            }
        }

        Err(AssetError::new(AssetErrorKind::GenerationExhausted {
            signature: signature.to_string(),
            attempts: self.attempts,
        })
        .into())
    }

    async fn attempt(
        &self,
        signature: &Signature,
        feedback: Option<&FumettoError>,
    ) -> FumettoResult<CharacterAsset> {
        let mut messages = vec![Message::text(Role::User, self.visual_prompt(signature))];
        if let Some(feedback) = feedback {
            messages.push(Message::text(
                Role::User,
                format!("Your previous artwork was rejected:\n{feedback}\nProduce corrected SVG."),
            ));
        }

        let request = GenerateRequest::builder()
            .messages(messages)
            .max_tokens(Some(self.settings.max_tokens))
            .temperature(Some(self.settings.temperature))
            .model(Some(self.settings.asset_model.clone()))
            .build()
            .map_err(|e| CollaboratorError::new(CollaboratorErrorKind::ClientCreation(e.to_string())))?;

        let response = call_with_retry(&self.policy, || self.driver.generate(&request)).await?;
        let text = response
            .text()
            .ok_or_else(|| CollaboratorError::new(CollaboratorErrorKind::EmptyResponse))?;

        let markup = extract_svg(&text).ok_or_else(|| {
            AssetError::new(AssetErrorKind::UnusableMarkup {
                signature: signature.to_string(),
                reason: "no <svg> element in response".to_string(),
            })
        })?;

        CharacterAsset::from_markup(signature, markup)
    }

    fn visual_prompt(&self, signature: &Signature) -> String {
        let blurb = self
            .catalog
            .definition_of(&signature.character)
            .map(|d| d.blurb().clone())
            .unwrap_or_default();

        let mut prompt = format!(
            "Draw one comic character as a single SVG illustration.\n\
             Character: {} ({blurb})\n",
            signature.character
        );
        if let Some(angle) = &signature.angle {
            prompt.push_str(&format!("Viewing angle: {angle}\n"));
        }
        if let Some(pose) = &signature.pose {
            prompt.push_str(&format!("Pose: {pose}\n"));
        }
        if let Some(emotion) = &signature.emotion {
            prompt.push_str(&format!("Facial emotion: {emotion}\n"));
        }
        for (axis, value) in &signature.customization {
            prompt.push_str(&format!("{axis}: {value}\n"));
        }
        prompt.push_str(&format!(
            "\nVisual contract, all mandatory:\n\
             - Vertical canvas: viewBox=\"0 0 300 500\".\n\
             - Fully transparent background, no background rectangle.\n\
             - Stroke width at least {MIN_STROKE_WIDTH}.\n\
             - Leave roughly {:.0}% empty margin on every side.\n\
             - Feet touch the bottom margin so the figure can stand on a ground line.\n\
             - Output ONLY the SVG markup, nothing else.",
            PADDING_FRACTION * 100.0
        ));
        prompt
    }
}

/// Pull the first `<svg>...</svg>` element out of a response that may wrap
/// it in markdown fences or prose.
fn extract_svg(response: &str) -> Option<String> {
    let start = response.find("<svg")?;
    let end = response[start..].find("</svg>")? + start + "</svg>".len();
    Some(response[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_is_extracted_from_fenced_response() {
        let response = "Here you go:\n```svg\n<svg viewBox=\"0 0 300 500\"><g/></svg>\n```";
        let markup = extract_svg(response).unwrap();
        assert!(markup.starts_with("<svg"));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn response_without_svg_yields_none() {
        assert!(extract_svg("I cannot draw that.").is_none());
    }
}
