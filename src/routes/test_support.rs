// Shared helpers for route-level tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use tempfile::TempDir;

use crate::config::{Config, OllamaConfig, RetrievalConfig, ServerConfig, UploadConfig};
use crate::llm::OllamaClient;
use crate::models::AppState;
use crate::retrieval::OllamaEmbedder;
use crate::store::DocumentStore;

fn config(upload_dir: &str, ollama_url: &str) -> Config {
    Config {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        ollama: OllamaConfig {
            url: ollama_url.to_string(),
            chat_model: "llama3.2".to_string(),
            embed_model: "nomic-embed-text".to_string(),
        },
        upload: UploadConfig {
            dir: upload_dir.to_string(),
            max_bytes: 1024,
            preview_chars: 500,
        },
        retrieval: RetrievalConfig { enabled: true },
    }
}

/// State whose Ollama endpoints point at a closed port; tests using it must
/// not reach the model.
pub fn test_state() -> (AppState, TempDir) {
    test_state_with_ollama("http://127.0.0.1:1")
}

/// Like [`test_state_with_ollama`] but with the document-prefix prompt
/// instead of similarity retrieval.
pub fn test_state_without_retrieval(ollama_url: &str) -> (AppState, TempDir) {
    let (mut state, dir) = test_state_with_ollama(ollama_url);
    state.config.retrieval.enabled = false;
    (state, dir)
}

pub fn test_state_with_ollama(ollama_url: &str) -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path().to_str().unwrap(), ollama_url);
    let state = AppState {
        llm: Arc::new(OllamaClient::new(
            config.ollama.url.clone(),
            config.ollama.chat_model.clone(),
        )),
        embedder: Arc::new(OllamaEmbedder::new(
            config.ollama.url.clone(),
            config.ollama.embed_model.clone(),
        )),
        documents: DocumentStore::default(),
        config,
    };
    (state, dir)
}

const BOUNDARY: &str = "XUPLOADBOUNDARY";

/// Build a single-field multipart/form-data request by hand.
pub fn multipart_request(uri: &str, field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
