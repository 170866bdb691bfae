// Ollama adapter implementation
// Uses the non-streaming /api/generate endpoint of a local Ollama server.
// API reference: https://github.com/ollama/ollama/blob/main/docs/api.md

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::provider::ChatModel;
use crate::types::{AppError, AppResult};

pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
}

#[derive(Deserialize)]
struct OllamaErrorResponse {
    error: String,
}

impl OllamaClient {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            model: model.into(),
        }
    }

}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/api/generate", self.url);

        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        debug!(model = %self.model, "Ollama request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LlmApi(format!("Ollama request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Ollama reports errors as {"error": "..."}
            if let Ok(parsed) = serde_json::from_str::<OllamaErrorResponse>(&error_text) {
                return Err(AppError::LlmApi(format!(
                    "Ollama API error ({status}): {}",
                    parsed.error
                )));
            }

            return Err(AppError::LlmApi(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::LlmApi(format!("Failed to parse Ollama response: {e}")))?;

        if !parsed.done {
            debug!("Ollama response not marked done");
        }

        Ok(parsed.response)
    }
}
