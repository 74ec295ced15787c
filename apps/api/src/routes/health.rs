use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version, dataset size and whether the LLM resolver is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobchat",
        "jobs_loaded": state.pipeline.table().len(),
        "llm_enabled": state.pipeline.llm_enabled(),
    }))
}
