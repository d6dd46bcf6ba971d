//! Pipeline configuration.
//!
//! Configuration precedence:
//! 1. Bundled defaults (include_str! from fumetto.toml)
//! 2. `fumetto.toml` in the current directory (optional override)

use config::{Config, File, FileFormat};
use fumetto_compose::PanelGeometry;
use fumetto_error::{ConfigError, FumettoResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Retry and deadline settings for the pipeline state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Total planning attempts shared between planning and validation
    pub retry_budget: usize,
    /// Generation attempts allowed per character signature
    pub asset_attempts: usize,
    /// Per-collaborator-call deadline in seconds
    pub call_timeout_secs: u64,
    /// Initial backoff for transient collaborator failures, in milliseconds
    pub backoff_initial_ms: u64,
    /// Backoff ceiling in seconds
    pub backoff_max_delay_secs: u64,
    /// How many times a single collaborator call is retried on transient
    /// failure before the error propagates
    pub transient_retries: usize,
}

/// Model selection and sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Model used for script planning
    pub planner_model: String,
    /// Model used for character artwork
    pub asset_model: String,
    /// Sampling temperature for both collaborators
    pub temperature: f32,
    /// Token ceiling per generation call
    pub max_tokens: u32,
}

/// The full configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FumettoConfig {
    /// Retry and deadline settings
    pub pipeline: PipelineSettings,
    /// Model settings
    pub model: ModelSettings,
    /// Panel layout geometry
    pub geometry: PanelGeometry,
}

impl FumettoConfig {
    /// Load configuration from bundled defaults plus an optional
    /// `fumetto.toml` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when an override file is present but
    /// malformed, or when a field fails to deserialize.
    #[tracing::instrument]
    pub fn load() -> FumettoResult<Self> {
        debug!("Loading configuration with precedence: current dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../fumetto.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("fumetto").required(false))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {e}")))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {e}")).into())
    }
}

impl Default for FumettoConfig {
    /// The bundled defaults, without touching the filesystem.
    fn default() -> Self {
        Self {
            pipeline: PipelineSettings {
                retry_budget: 2,
                asset_attempts: 2,
                call_timeout_secs: 60,
                backoff_initial_ms: 500,
                backoff_max_delay_secs: 8,
                transient_retries: 3,
            },
            model: ModelSettings {
                planner_model: "gemini-2.5-flash".to_string(),
                asset_model: "gemini-2.5-flash".to_string(),
                temperature: 0.8,
                max_tokens: 4096,
            },
            geometry: PanelGeometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_default_impl() {
        const DEFAULT_CONFIG: &str = include_str!("../../../fumetto.toml");
        let bundled: FumettoConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(bundled, FumettoConfig::default());
    }
}
