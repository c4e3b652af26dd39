// src/llm/mod.rs
//! Single point of entry for all LLM calls. The service delegates every
//! piece of semantic work (job extraction, suitability analysis) to the
//! hosted chat-completions API through this client.

use crate::config::LlmConfig;
use crate::error::AnalysisError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod response;

/// Model identifiers accepted from the `model_choice` form field.
pub const ALLOWED_MODELS: [&str; 5] = [
    "llama-3.3-70b-versatile",
    "llama-3.2-3b-preview",
    "llama-3.1-8b-instant",
    "gemma2-9b-it",
    "qwen-2.5-32b",
];

const TEMPERATURE: f32 = 0.1;

pub fn validate_model(choice: &str) -> Result<(), AnalysisError> {
    if ALLOWED_MODELS.contains(&choice) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidInput(format!(
            "Invalid model selected. Choose one of: {}",
            ALLOWED_MODELS.join(", ")
        )))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

pub struct LlmClient {
    client: Client,
    config: LlmConfig,
    model: String,
}

impl LlmClient {
    pub fn new(config: LlmConfig, model: &str) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AnalysisError::Internal(anyhow::anyhow!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            config,
            model: model.to_string(),
        })
    }

    /// Sends one user prompt and returns the raw text of the first choice.
    pub async fn complete(&self, prompt: &str) -> Result<String, AnalysisError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        info!("Sending completion request to {} ({})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Upstream(format!("request to LLM API failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Upstream(format!(
                "LLM API returned {}: {}",
                status,
                response::snippet(&error_text)
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            AnalysisError::Upstream(format!("failed to decode LLM API response: {}", e))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AnalysisError::Upstream("LLM response contained no choices".into()))?;

        info!("Received completion ({} chars)", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_model_accepts_known() {
        assert!(validate_model("gemma2-9b-it").is_ok());
        assert!(validate_model("llama-3.3-70b-versatile").is_ok());
    }

    #[test]
    fn test_validate_model_rejects_unknown() {
        let err = validate_model("gpt-4o").unwrap_err();
        match err {
            AnalysisError::InvalidInput(msg) => {
                // The 400 body must list the allowed values.
                for model in ALLOWED_MODELS {
                    assert!(msg.contains(model));
                }
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
