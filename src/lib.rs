// Docchat - chat with an uploaded PDF through a locally hosted Ollama model

pub mod config;
pub mod extract;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod retrieval;
pub mod routes;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
