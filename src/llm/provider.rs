use async_trait::async_trait;

use crate::types::AppResult;

/// Seam between the chat route and the model backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Forward a prompt verbatim and return the model's text response.
    /// No retry, no backoff; failures map to `AppError::LlmApi`.
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
