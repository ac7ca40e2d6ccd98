//! HTTP surface: router, shared state and endpoint wiring

pub mod catalog;
pub mod handlers;
pub mod response;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use study_planner_core::llm::CompletionBackend;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared request-handling state
///
/// The backend and the candidate model list are injected once at
/// startup and never mutated; every request computes fresh from its own
/// inputs.
pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
    pub models: Vec<String>,
    pub api_key_configured: bool,
}

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/generate-plan", post(handlers::generate_plan))
        .route("/goals", get(handlers::goals))
        .route("/backgrounds", get(handlers::backgrounds))
        .route("/time-options", get(handlers::time_options))
        .route("/difficulties", get(handlers::difficulties))
        .route("/models", get(handlers::models))
        .route("/test-ai", post(handlers::test_ai))
        .route("/test-plan", get(handlers::test_plan))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        // Panics become a generic 500 instead of a dropped connection
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    // Shutdown on ctrl-c; in-flight requests run to completion
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down");
}
