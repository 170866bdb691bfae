use std::sync::Arc;

use crate::config::Config;
use crate::llm::ChatModel;
use crate::retrieval::Embedder;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub documents: DocumentStore,
    pub llm: Arc<dyn ChatModel>,
    pub embedder: Arc<dyn Embedder>,
}

// API Request/Response types

#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// Truncated preview of the extracted text.
    pub text: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub model: String,
}
