//! fumetto: a three panel educational comic generator.
//!
//! A topic plus optional background material flows through a planning,
//! validation, asset generation, and composition pipeline driven by LLM
//! collaborators, and comes out as a structured document a renderer can
//! draw.
//!
//! # Example
//!
//! ```rust,ignore
//! use fumetto::{Catalog, FumettoConfig, GeminiClient, PipelineController, ProgressLog};
//!
//! let catalog = Catalog::builtin();
//! let config = FumettoConfig::load()?;
//! let client = GeminiClient::new()?;
//! let progress = ProgressLog::new();
//! let controller = PipelineController::new(&client, &client, &catalog, &config, &progress);
//! let document = controller.run("how compost works", None).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;

pub use cli::Cli;
pub use fumetto_catalog::{Catalog, CharacterDefinition};
pub use fumetto_compose::{
    compose, BubbleAnchor, CharacterAsset, FinalDocument, PanelGeometry, PanelLayout, Placement,
};
pub use fumetto_core::{
    init_telemetry, GenerateRequest, GenerateResponse, Input, Message, Output, Role,
};
pub use fumetto_error::{FumettoError, FumettoErrorKind, FumettoResult};
pub use fumetto_interface::{
    CreativeDriver, ProgressEvent, ProgressLog, ProgressSink, ProgressStatus, Stage,
};
pub use fumetto_models::GeminiClient;
pub use fumetto_pipeline::{
    AssetStudio, FumettoConfig, PipelineController, ScriptPlanner,
};
pub use fumetto_script::{
    parse_script, validate_script, CharacterReference, ComicScript, DialogueLine, Panel, Signature,
};
