//! Trait definitions for creative collaborators.

use async_trait::async_trait;
use fumetto_core::{GenerateRequest, GenerateResponse};
use fumetto_error::FumettoResult;

/// Core trait that all creative collaborators implement.
///
/// This provides the minimal interface for blocking text generation.
/// Both the script planner and the asset studio speak this trait; they
/// differ only in the prompts they send and how they decode the reply.
#[async_trait]
pub trait CreativeDriver: Send + Sync {
    /// Generate model output given a request.
    async fn generate(&self, req: &GenerateRequest) -> FumettoResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

