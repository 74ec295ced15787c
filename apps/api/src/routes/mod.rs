pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/chat/history", get(handlers::handle_history))
        .route("/api/v1/suggestions", get(handlers::handle_suggestions))
        .route(
            "/api/v1/suggestions/:index",
            post(handlers::handle_suggestion),
        )
        .with_state(state)
}
