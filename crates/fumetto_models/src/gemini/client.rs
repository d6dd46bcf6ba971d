//! The Gemini driver.

use super::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use fumetto_core::{GenerateRequest, GenerateResponse, Output};
use fumetto_error::{CollaboratorError, CollaboratorErrorKind, FumettoResult};
use fumetto_interface::CreativeDriver;
use tracing::debug;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// [`CreativeDriver`] over the Gemini generateContent REST endpoint.
///
/// The client applies no retry or deadline of its own; the pipeline's
/// retry combinator owns both.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model_name: String,
}

impl GeminiClient {
    /// Build a client with the default model, reading `GEMINI_API_KEY`
    /// from the environment.
    ///
    /// # Errors
    ///
    /// Fails when the key is missing or the HTTP client cannot be built.
    pub fn new() -> FumettoResult<Self> {
        Self::with_model(DEFAULT_MODEL)
    }

    /// Build a client pinned to `model_name`.
    ///
    /// # Errors
    ///
    /// Fails when the key is missing or the HTTP client cannot be built.
    pub fn with_model(model_name: &str) -> FumettoResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| CollaboratorError::new(CollaboratorErrorKind::MissingApiKey))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CollaboratorError::new(CollaboratorErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key,
            model_name: model_name.to_string(),
        })
    }

    async fn generate_internal(&self, req: &GenerateRequest) -> FumettoResult<GenerateContentResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        let url = format!("{BASE_URL}/{model}:generateContent");
        let body = GenerateContentRequest::from_request(req);

        debug!(model, contents = body.contents.len(), "Calling Gemini");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CollaboratorError::new(CollaboratorErrorKind::Unavailable(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CollaboratorError::new(CollaboratorErrorKind::Http {
                status_code: status.as_u16(),
                message: message.chars().take(500).collect(),
            })
            .into());
        }

        response
            .json()
            .await
            .map_err(|e| {
                CollaboratorError::new(CollaboratorErrorKind::MalformedResponse(e.to_string())).into()
            })
    }
}

#[async_trait]
impl CreativeDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> FumettoResult<GenerateResponse> {
        let response = self.generate_internal(req).await?;
        let text = response.text();
        if text.is_empty() {
            return Err(CollaboratorError::new(CollaboratorErrorKind::EmptyResponse).into());
        }
        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
