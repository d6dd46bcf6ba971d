//! End-to-end pipeline runs over a scripted mock collaborator.

use async_trait::async_trait;
use fumetto_catalog::Catalog;
use fumetto_core::{GenerateRequest, GenerateResponse, Input, Output};
use fumetto_error::FumettoResult;
use fumetto_interface::{CreativeDriver, ProgressLog, ProgressStatus, Stage};
use fumetto_pipeline::{FumettoConfig, PipelineController};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays canned responses and records every request it sees.
struct MockDriver {
    responses: Mutex<VecDeque<String>>,
    fallback: String,
    calls: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

impl MockDriver {
    fn replaying(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            fallback: responses.last().unwrap_or(&"").to_string(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn always(response: &str) -> Self {
        Self::replaying(&[response])
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> String {
        self.requests.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl CreativeDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> FumettoResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = req
            .messages
            .iter()
            .flat_map(|m| &m.content)
            .map(|Input::Text(t)| t.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.requests.lock().unwrap().push(text);

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Ok(GenerateResponse {
            outputs: vec![Output::Text(response)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-1"
    }
}

const SVG: &str = "```svg\n<svg viewBox=\"0 0 300 500\"><g stroke-width=\"3\"/></svg>\n```";

/// Three panels staging bill (front only) and ethan from the side; ethan's
/// staging repeats, so the script carries exactly two unique signatures.
fn good_script() -> String {
    let bill = r#"{"character": "bill", "pose": "shrug", "emotion": "curious"}"#;
    let ethan =
        r#"{"character": "ethan", "angle": "side", "pose": "explaining", "emotion": "happy"}"#;
    format!(
        r#"{{
          "title": "Gravity",
          "subtitle": "Why apples fall",
          "panels": [
            {{"background": "an orchard", "characters": [{bill}],
              "dialogue": [{{"speaker": 0, "text": "Why did that apple fall?"}}]}},
            {{"background": "a chalkboard", "characters": [{ethan}],
              "dialogue": [{{"speaker": 0, "text": "Mass attracts mass."}}]}},
            {{"background": "an orchard", "characters": [{bill}, {ethan}],
              "dialogue": [{{"speaker": 0, "text": "So Earth pulls the apple!"}},
                           {{"speaker": 1, "text": "And the apple pulls Earth."}}]}}
          ]
        }}"#
    )
}

/// Same shape, but bill carries an angle he cannot have.
fn incompatible_script() -> String {
    good_script().replace(
        r#"{"character": "bill", "pose": "shrug", "emotion": "curious"}"#,
        r#"{"character": "bill", "angle": "side", "pose": "shrug", "emotion": "curious"}"#,
    )
}

fn config() -> FumettoConfig {
    let mut config = FumettoConfig::default();
    config.pipeline.backoff_initial_ms = 1;
    config
}

#[tokio::test]
async fn successful_run_produces_three_composed_panels() {
    let planner = MockDriver::always(&good_script());
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let document = controller.run("gravity", None).await.unwrap();

    assert_eq!(document.panels.len(), 3);
    assert_eq!(document.title.as_deref(), Some("Gravity"));
    assert_eq!(document.panels[0].placements.len(), 1);
    assert_eq!(document.panels[2].placements.len(), 2);
    assert_eq!(document.panels[2].bubbles.len(), 2);
    assert_eq!(planner.calls(), 1);
    assert_eq!(controller.stage(), Stage::Done);
}

#[tokio::test]
async fn every_accepted_script_has_three_small_panels() {
    let catalog = Catalog::builtin();
    let config = config();
    for topic in [
        "Newton explaining gravity to a curious cat",
        "how compost works",
        "what a prime number is",
        "why the sky is blue",
    ] {
        let planner = MockDriver::always(&good_script());
        let studio = MockDriver::always(SVG);
        let progress = ProgressLog::new();
        let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

        let document = controller.run(topic, None).await.unwrap();
        assert_eq!(document.panels.len(), 3);
        for panel in &document.panels {
            assert!((1..=2).contains(&panel.placements.len()));
        }
    }
}

#[tokio::test]
async fn shared_signatures_generate_exactly_once() {
    let planner = MockDriver::always(&good_script());
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    controller.run("gravity", None).await.unwrap();

    // bill and ethan each appear twice across panels but carry one
    // signature each
    assert_eq!(studio.calls(), 2);
    let details: Vec<_> = progress
        .events()
        .into_iter()
        .filter(|e| e.stage == Stage::GeneratingAssets && e.status == ProgressStatus::Detail)
        .collect();
    assert_eq!(details.len(), 2);
}

#[tokio::test]
async fn progress_events_are_ordered_by_stage() {
    let planner = MockDriver::always(&good_script());
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    controller.run("gravity", None).await.unwrap();

    let stages: Vec<Stage> = progress
        .events()
        .into_iter()
        .filter(|e| e.status == ProgressStatus::Completed)
        .map(|e| e.stage)
        .collect();
    assert_eq!(
        stages,
        vec![
            Stage::Planning,
            Stage::Validating,
            Stage::GeneratingAssets,
            Stage::Compositing,
            Stage::Done,
        ]
    );
}

#[tokio::test]
async fn malformed_planner_output_exhausts_the_budget_exactly() {
    let planner = MockDriver::always("I would rather write a haiku.");
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let err = controller.run("gravity", None).await.unwrap_err();

    assert!(format!("{err}").contains("Could not generate a valid script"));
    assert_eq!(planner.calls(), config.pipeline.retry_budget);
    assert_eq!(studio.calls(), 0);
    assert_eq!(controller.stage(), Stage::Failed);
}

#[tokio::test]
async fn incompatible_script_fails_in_validating_after_retries() {
    let planner = MockDriver::always(&incompatible_script());
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let err = controller.run("gravity", None).await.unwrap_err();

    assert!(format!("{err}").contains("failed while Validating"));
    assert_eq!(planner.calls(), config.pipeline.retry_budget);
    assert!(progress
        .events()
        .iter()
        .any(|e| e.stage == Stage::Validating && e.status == ProgressStatus::Failed));
    let last = progress.events().last().cloned().unwrap();
    assert_eq!(last.stage, Stage::Failed);
}

#[tokio::test]
async fn corrective_feedback_reaches_the_planner() {
    let planner = MockDriver::replaying(&[&incompatible_script(), &good_script()]);
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let document = controller.run("gravity", None).await.unwrap();

    assert_eq!(document.panels.len(), 3);
    assert_eq!(planner.calls(), 2);
    assert!(planner.last_request().contains("front-only"));
    assert!(planner.last_request().contains("rejected"));
}

#[tokio::test]
async fn exhausted_asset_generation_fails_the_whole_request() {
    let planner = MockDriver::always(&good_script());
    let studio = MockDriver::always("No drawing today.");
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let err = controller.run("gravity", None).await.unwrap_err();

    assert!(format!("{err}").contains("Could not illustrate"));
    assert_eq!(controller.stage(), Stage::Failed);
}

#[tokio::test]
async fn context_is_quoted_into_the_planner_prompt() {
    let planner = MockDriver::always(&good_script());
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    controller
        .run("gravity", Some("Apples accelerate at 9.8 m/s^2."))
        .await
        .unwrap();

    assert!(planner.last_request().contains("9.8 m/s^2"));
    assert!(planner.last_request().contains("advisory"));
}

#[tokio::test]
async fn empty_topic_is_rejected_before_any_call() {
    let planner = MockDriver::always(&good_script());
    let studio = MockDriver::always(SVG);
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let err = controller.run("   ", None).await.unwrap_err();

    assert!(format!("{err}").contains("topic must not be empty"));
    assert_eq!(planner.calls(), 0);
}

#[tokio::test]
async fn cancellation_abandons_the_run() {
    struct NeverDriver;

    #[async_trait]
    impl CreativeDriver for NeverDriver {
        async fn generate(&self, _req: &GenerateRequest) -> FumettoResult<GenerateResponse> {
            std::future::pending().await
        }
        fn provider_name(&self) -> &'static str {
            "never"
        }
        fn model_name(&self) -> &str {
            "never-1"
        }
    }

    let planner = NeverDriver;
    let studio = NeverDriver;
    let catalog = Catalog::builtin();
    let config = config();
    let progress = ProgressLog::new();
    let controller = PipelineController::new(&planner, &studio, &catalog, &config, &progress);

    let err = controller
        .run_until("gravity", None, std::future::ready(()))
        .await
        .unwrap_err();

    assert!(format!("{err}").contains("cancelled"));
    assert_eq!(controller.stage(), Stage::Failed);
}
