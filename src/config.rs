use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ollama: OllamaConfig,
    pub upload: UploadConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    pub url: String,
    pub chat_model: String,
    pub embed_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub dir: String,
    pub max_bytes: usize,
    /// Number of characters returned as the upload preview and used as the
    /// prompt prefix when retrieval is disabled.
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// When true, chat prompts carry the best-matching sentence from the
    /// document; when false, a fixed-length text prefix.
    pub enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Tests pass a
    /// closure instead of touching the process environment.
    fn from_lookup(get: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                port: get("PORT").unwrap_or_else(|| "3000".to_string()).parse()?,
                host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            },
            ollama: OllamaConfig {
                url: get("OLLAMA_URL")
                    .unwrap_or_else(|| "http://localhost:11434".to_string()),
                chat_model: get("OLLAMA_CHAT_MODEL")
                    .unwrap_or_else(|| "llama3.2".to_string()),
                embed_model: get("OLLAMA_EMBED_MODEL")
                    .unwrap_or_else(|| "nomic-embed-text".to_string()),
            },
            upload: UploadConfig {
                dir: get("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string()),
                max_bytes: get("UPLOAD_MAX_BYTES")
                    .unwrap_or_else(|| (50 * 1024 * 1024).to_string())
                    .parse()?,
                preview_chars: get("PREVIEW_CHARS")
                    .unwrap_or_else(|| "500".to_string())
                    .parse()?,
            },
            retrieval: RetrievalConfig {
                enabled: get("RETRIEVAL_ENABLED")
                    .unwrap_or_else(|| "true".to_string())
                    .parse()?,
            },
        })
    }
}
