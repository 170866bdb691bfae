// LLM abstraction layer

pub mod ollama;
pub mod provider;

pub use ollama::OllamaClient;
pub use provider::ChatModel;
