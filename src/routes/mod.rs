//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` - Static chat page
//! - `/upload` - PDF upload and text extraction
//! - `/chat` - Chat against the uploaded document
//! - `/health` - Health check

pub mod chat;
pub mod health;
pub mod ui;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(ui::router())
        .merge(health::router(state.clone()))
        .merge(upload::router(state.clone()))
        .merge(chat::router(state));

    apply_cors(router)
}
