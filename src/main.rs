use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docchat::config::Config;
use docchat::llm::OllamaClient;
use docchat::retrieval::OllamaEmbedder;
use docchat::store::DocumentStore;
use docchat::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docchat=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Ensure the upload folder exists
    tokio::fs::create_dir_all(&config.upload.dir).await?;

    // Create shared state
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
        config: config.clone(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
