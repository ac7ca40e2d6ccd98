//! `study-planner` - multi-course study planner API
//!
//! Turns a list of weighted courses, available days and a daily hour
//! budget into a day-by-day study schedule, delegating the actual plan
//! to Groq's chat completion API with sequential model fallback.

use anyhow::{bail, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use study_planner_core::llm::{GroqClient, LlmConfig};
use study_planner_core::AppConfig;

use crate::cli::Cli;
use crate::server::AppState;

mod cli;
mod server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("study_planner=info,study_planner_core=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let port = cli.port.unwrap_or(config.port);

    if !config.api_key_configured() {
        warn!("GROQ_API_KEY is not set");
        warn!("Set it in the environment: GROQ_API_KEY=your_groq_key_here");
        warn!("Get a free key at https://console.groq.com/keys");
        if config.missing_key_is_fatal() {
            bail!("GROQ_API_KEY is required in production (set ALLOW_MISSING_API_KEY=1 to override)");
        }
    }

    let client = GroqClient::new(LlmConfig::groq(config.groq_api_key.clone()))?;
    let models = client.config().models.clone();

    let state = Arc::new(AppState {
        backend: Arc::new(client),
        models,
        api_key_configured: config.api_key_configured(),
    });

    info!("Multi-Course Study Planner API v{}", env!("CARGO_PKG_VERSION"));
    info!("AI provider: GROQ ({} candidate models)", state.models.len());
    info!(
        "API key: {}",
        if state.api_key_configured {
            "configured"
        } else {
            "missing"
        }
    );
    info!("Endpoints: GET /, GET /health, POST /generate-plan, POST /test-ai, GET /test-plan");

    server::serve(state, &cli.host, port).await
}
