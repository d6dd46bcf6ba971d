//! The comic generation pipeline.
//!
//! One request flows strictly forward through four stages: planning,
//! validation, asset generation, and composition. The
//! [`PipelineController`] owns all request-scoped state and is the only
//! place retry policy is applied; the planner and asset studio are
//! stateless workers over a [`CreativeDriver`].
//!
//! [`CreativeDriver`]: fumetto_interface::CreativeDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod config;
mod controller;
mod planner;
mod retry;

pub use assets::AssetStudio;
pub use config::{FumettoConfig, ModelSettings, PipelineSettings};
pub use controller::PipelineController;
pub use planner::ScriptPlanner;
pub use retry::{call_with_retry, RetryPolicy};
