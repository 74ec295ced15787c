mod chat;
mod config;
mod dataset;
mod errors;
mod llm_client;
mod models;
mod routes;
mod search;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dataset::load_jobs;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::filters::KeywordFilterChain;
use crate::search::llm_resolver::LlmResolver;
use crate::search::pipeline::ResolutionPipeline;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobYaari chat v{}", env!("CARGO_PKG_VERSION"));

    // The service cannot answer anything without the dataset: fail fast.
    let table = Arc::new(load_jobs(&config.data_path)?);
    if table.is_empty() {
        warn!("Job dataset is empty: every query will return no jobs");
    }

    let llm = build_llm_resolver(&config);

    let chain = KeywordFilterChain::new()?;
    info!("Keyword filter stages: {:?}", chain.stage_names());
    let pipeline = ResolutionPipeline::new(table, chain, llm);
    let state = AppState::new(pipeline);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = bind_listener(&config.host, config.port).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// The LLM resolver exists only when a Gemini key is configured. A missing key
/// or a client that fails to build leaves the process in keyword-only mode for
/// its whole lifetime.
fn build_llm_resolver(config: &Config) -> Option<LlmResolver> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("GEMINI_API_KEY not set: running in basic keyword search mode");
        return None;
    };

    match LlmClient::new(api_key) {
        Ok(client) => {
            info!("Gemini LLM client initialized (model: {})", llm_client::MODEL);
            Some(LlmResolver::new(Arc::new(client)))
        }
        Err(e) => {
            warn!("Gemini client initialization failed, using keyword search: {e}");
            None
        }
    }
}

/// `host` may be an IP address or a resolvable name such as `localhost`.
async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))
}
