// Similarity retrieval: pick the document sentence closest to the query.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{AppError, AppResult};

/// Trait for embedding backends.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, returning one vector per input (in order).
    async fn embed_batch(&self, texts: &[&str]) -> AppResult<Vec<Vec<f32>>>;
}

/// Embedder backed by a local Ollama instance.
pub struct OllamaEmbedder {
    client: Client,
    url: String,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            model: model.into(),
        }
    }
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> AppResult<Vec<Vec<f32>>> {
        let request = EmbedRequest {
            model: self.model.clone(),
            input: texts.iter().map(|s| s.to_string()).collect(),
        };

        debug!(count = texts.len(), "embedding batch via {}", self.url);

        let response = self
            .client
            .post(format!("{}/api/embed", self.url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Embedding(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Embedding(format!("{status}: {body}")));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| AppError::Embedding(format!("bad response: {e}")))?;

        Ok(parsed.embeddings)
    }
}

/// Naive sentence split on the literal substring ". ". Abbreviations,
/// decimals, and other sentence-final punctuation are not handled.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let (dot, na, nb) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(d, aa, bb), (x, y)| {
            (d + x * y, aa + x * x, bb + y * y)
        });

    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na.sqrt() * nb.sqrt())
    }
}

/// Embed every sentence of `document` plus the query and return the single
/// highest-scoring sentence. No top-k, no minimum-score threshold. An
/// empty document yields `Ok(None)`.
pub async fn best_context(
    embedder: &dyn Embedder,
    document: &str,
    query: &str,
) -> AppResult<Option<String>> {
    let sentences = split_sentences(document);
    if sentences.is_empty() {
        return Ok(None);
    }

    let mut inputs: Vec<&str> = sentences.clone();
    inputs.push(query);

    let mut vectors = embedder.embed_batch(&inputs).await?;
    if vectors.len() != inputs.len() {
        return Err(AppError::Embedding(format!(
            "expected {} vectors, got {}",
            inputs.len(),
            vectors.len()
        )));
    }

    let query_vec = vectors.pop().unwrap_or_default();

    let best = sentences
        .iter()
        .zip(vectors.iter())
        .map(|(sentence, vec)| (*sentence, cosine_similarity(vec, &query_vec)))
        .max_by(|(_, a), (_, b)| a.total_cmp(b));

    Ok(best.map(|(sentence, _)| sentence.to_string()))
}
