//! Wire types for the Gemini generateContent endpoint.

use fumetto_core::{GenerateRequest, Input, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(super) struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentRequest {
    /// Map the provider-neutral request onto the Gemini shape.
    ///
    /// System messages become the system instruction; assistant turns are
    /// sent with the "model" role.
    pub fn from_request(req: &GenerateRequest) -> Self {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in &req.messages {
            let parts: Vec<Part> = message
                .content
                .iter()
                .map(|Input::Text(text)| Part { text: text.clone() })
                .collect();
            match message.role {
                Role::System => system_parts.extend(parts),
                Role::User => contents.push(Content {
                    role: Some("user".to_string()),
                    parts,
                }),
                Role::Assistant => contents.push(Content {
                    role: Some("model".to_string()),
                    parts,
                }),
            }
        }

        let system_instruction = if system_parts.is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: system_parts,
            })
        };

        let generation_config = if req.max_tokens.is_none() && req.temperature.is_none() {
            None
        } else {
            Some(GenerationConfig {
                max_output_tokens: req.max_tokens,
                temperature: req.temperature,
            })
        };

        Self {
            contents,
            system_instruction,
            generation_config,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenate the text parts of every candidate.
    pub fn text(&self) -> String {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| &c.parts)
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
