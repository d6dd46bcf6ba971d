//! The pipeline state machine.

use crate::assets::AssetStudio;
use crate::config::FumettoConfig;
use crate::planner::ScriptPlanner;
use crate::retry::RetryPolicy;
use fumetto_catalog::Catalog;
use fumetto_compose::{compose, FinalDocument};
use fumetto_error::{
    ConfigError, FumettoError, FumettoErrorKind, FumettoResult, PipelineError, PipelineErrorKind,
};
use fumetto_interface::{CreativeDriver, ProgressEvent, ProgressSink, ProgressStatus, Stage};
use fumetto_script::validate_script;
use std::future::Future;
use std::sync::Mutex;
use tracing::{info, warn};

/// Drives one request through Planning, Validating, GeneratingAssets, and
/// Compositing.
///
/// Transitions are strictly forward; Validating loops back to Planning
/// with corrective feedback until the shared retry budget runs out. The
/// controller owns all request-scoped state, so one controller serves one
/// request.
pub struct PipelineController<'a> {
    planner: ScriptPlanner<'a>,
    studio: AssetStudio<'a>,
    catalog: &'a Catalog,
    config: &'a FumettoConfig,
    progress: &'a dyn ProgressSink,
    stage: Mutex<Stage>,
}

impl<'a> PipelineController<'a> {
    /// Wire a controller over two creative drivers, usually the same
    /// client for text planning and artwork.
    pub fn new(
        planner_driver: &'a dyn CreativeDriver,
        asset_driver: &'a dyn CreativeDriver,
        catalog: &'a Catalog,
        config: &'a FumettoConfig,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        let policy = RetryPolicy::from(&config.pipeline);
        Self {
            planner: ScriptPlanner::new(planner_driver, catalog, &config.model, policy),
            studio: AssetStudio::new(asset_driver, catalog, &config.model, &config.pipeline),
            catalog,
            config,
            progress,
            stage: Mutex::new(Stage::Planning),
        }
    }

    /// The stage the controller last entered.
    pub fn stage(&self) -> Stage {
        *self.stage.lock().expect("stage lock poisoned")
    }

    /// Run the full pipeline for one topic.
    ///
    /// `context` is optional advisory text extracted from an uploaded
    /// document. On success the document covers every panel; on failure
    /// nothing partial is returned and the final progress event carries
    /// the error.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the pipeline; the stage it
    /// failed in is available through [`PipelineController::stage`].
    #[tracing::instrument(skip_all, fields(topic = %topic))]
    pub async fn run(&self, topic: &str, context: Option<&str>) -> FumettoResult<FinalDocument> {
        if topic.trim().is_empty() {
            return Err(ConfigError::new("topic must not be empty").into());
        }

        match self.run_stages(topic, context).await {
            Ok(document) => {
                self.enter(Stage::Done);
                self.emit(Stage::Done, ProgressStatus::Completed, "");
                info!("Pipeline complete");
                Ok(document)
            }
            Err(e) => {
                let failed_in = self.stage();
                self.enter(Stage::Failed);
                self.emit(Stage::Failed, ProgressStatus::Failed, format!("{failed_in}: {e}"));
                warn!(stage = %failed_in, error = %e, "Pipeline failed");
                Err(e)
            }
        }
    }

    /// Run the pipeline, abandoning it if `cancel` resolves first.
    ///
    /// Cancellation is all-or-nothing: in-flight collaborator calls are
    /// dropped and no partial document is returned.
    ///
    /// # Errors
    ///
    /// As [`PipelineController::run`], plus a pipeline cancellation error
    /// when `cancel` wins the race.
    pub async fn run_until(
        &self,
        topic: &str,
        context: Option<&str>,
        cancel: impl Future<Output = ()>,
    ) -> FumettoResult<FinalDocument> {
        tokio::select! {
            result = self.run(topic, context) => result,
            _ = cancel => {
                let stage = self.stage();
                self.enter(Stage::Failed);
                let err: FumettoError =
                    PipelineError::new(PipelineErrorKind::Cancelled(stage.to_string())).into();
                self.emit(Stage::Failed, ProgressStatus::Failed, format!("{err}"));
                warn!(stage = %stage, "Pipeline cancelled");
                Err(err)
            }
        }
    }

    async fn run_stages(&self, topic: &str, context: Option<&str>) -> FumettoResult<FinalDocument> {
        let script = self.plan_and_validate(topic, context).await?;

        self.enter(Stage::GeneratingAssets);
        self.emit(Stage::GeneratingAssets, ProgressStatus::Started, "");
        let signatures = script.signatures();
        let assets = self.studio.generate_all(&signatures, self.progress).await?;
        self.emit(
            Stage::GeneratingAssets,
            ProgressStatus::Completed,
            format!("{} unique assets", assets.len()),
        );

        self.enter(Stage::Compositing);
        self.emit(Stage::Compositing, ProgressStatus::Started, "");
        let document = compose(&script, &assets, &self.config.geometry)?;
        self.emit(Stage::Compositing, ProgressStatus::Completed, "");
        Ok(document)
    }

    /// The corrective loop over Planning and Validating.
    ///
    /// The budget counts planner invocations, shared between schema and
    /// compatibility rejections. Collaborator failures are not corrective
    /// material and propagate immediately; the bounded transient retry
    /// already happened inside the call.
    async fn plan_and_validate(
        &self,
        topic: &str,
        context: Option<&str>,
    ) -> FumettoResult<fumetto_script::ComicScript> {
        let budget = self.config.pipeline.retry_budget.max(1);
        let mut feedback: Option<String> = None;

        for attempt in 1..=budget {
            self.enter(Stage::Planning);
            self.emit(
                Stage::Planning,
                ProgressStatus::Started,
                format!("attempt {attempt} of {budget}"),
            );

            let script = match self.planner.plan(topic, context, feedback.as_deref()).await {
                Ok(script) => {
                    self.emit(Stage::Planning, ProgressStatus::Completed, "");
                    script
                }
                Err(e) if is_corrective(&e) => {
                    self.emit(Stage::Planning, ProgressStatus::Failed, format!("{e}"));
                    warn!(attempt, error = %e, "Planner output rejected");
                    feedback = Some(e.to_string());
                    continue;
                }
                Err(e) => return Err(e),
            };

            self.enter(Stage::Validating);
            self.emit(Stage::Validating, ProgressStatus::Started, "");
            match validate_script(&script, self.catalog) {
                Ok(()) => {
                    self.emit(Stage::Validating, ProgressStatus::Completed, "");
                    return Ok(script);
                }
                Err(e) => {
                    self.emit(Stage::Validating, ProgressStatus::Failed, format!("{e}"));
                    warn!(attempt, error = %e, "Script rejected by catalog validation");
                    feedback = Some(e.to_string());
                }
            }
        }

        Err(PipelineError::new(PipelineErrorKind::RetryBudgetExhausted {
            stage: self.stage().to_string(),
            attempts: budget,
        })
        .into())
    }

    fn enter(&self, stage: Stage) {
        *self.stage.lock().expect("stage lock poisoned") = stage;
    }

    fn emit(&self, stage: Stage, status: ProgressStatus, detail: impl Into<String>) {
        self.progress.emit(ProgressEvent::new(stage, status, detail));
    }
}

/// Whether a planning failure can be fed back to the planner as a
/// corrective instruction.
fn is_corrective(error: &FumettoError) -> bool {
    matches!(
        error.kind(),
        FumettoErrorKind::Schema(_) | FumettoErrorKind::Compat(_)
    )
}
