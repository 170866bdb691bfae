use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::models::{AppState, ChatRequest, ChatResponse};
use crate::types::{AppError, AppResult};
use crate::{extract, retrieval};

/// Canned reply when the user asks about the document before uploading one.
const NO_DOCUMENT_REPLY: &str = "No PDF content available. Please upload a PDF first.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(post_chat))
        .with_state(state)
}

/// Handle chat requests.
///
/// With a document uploaded, the prompt carries either the most similar
/// sentence (retrieval enabled) or a fixed-length text prefix as context.
/// Without one, questions about the document get a canned reply and
/// everything else is forwarded to the model as-is.
async fn post_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    // Malformed bodies get the same {"error": ...} shape as our own 400s.
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let message = request.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(AppError::InvalidRequest("No message provided.".to_string()));
    }

    info!(len = message.len(), "Received chat request");

    let prompt = match state.documents.current().await {
        Some(doc) => {
            let context = if state.config.retrieval.enabled {
                retrieval::best_context(state.embedder.as_ref(), &doc.text, message).await?
            } else {
                None
            };

            let context = context.unwrap_or_else(|| {
                extract::preview(&doc.text, state.config.upload.preview_chars).to_string()
            });

            format!("Context from the uploaded PDF:\n{context}\n\nQuestion: {message}")
        }
        None => {
            if message.to_lowercase().contains("pdf") {
                return Ok(Json(ChatResponse {
                    reply: NO_DOCUMENT_REPLY.to_string(),
                }));
            }
            message.to_string()
        }
    };

    let reply = state.llm.complete(&prompt).await?;

    Ok(Json(ChatResponse { reply }))
}
