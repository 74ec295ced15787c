//! Axum route handlers for the chat surface.

use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::page::ChatPage;
use crate::chat::render::{render_job_cards, render_transcript};
use crate::chat::SUGGESTIONS;
use crate::errors::AppError;
use crate::models::conversation::{ConversationEntry, ConversationHistory};
use crate::state::AppState;

/// Longest message accepted from the input box.
const MAX_MESSAGE_CHARS: usize = 1000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Everything the page needs to redraw after one message.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub results_count: usize,
    /// Always empty: the input box is cleared after each send.
    pub input: String,
    pub chat_html: String,
    pub cards_html: String,
    pub history_len: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = ChatPage::new(state.pipeline.table().len(), state.pipeline.llm_enabled());
    Ok(Html(page.render()?))
}

/// POST /api/v1/chat
///
/// Resolves one message, appends it to the session transcript and returns the
/// re-rendered transcript plus job cards. A blank message changes nothing.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    if request.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "message cannot exceed {MAX_MESSAGE_CHARS} characters"
        )));
    }

    Ok(Json(process_message(&state, &request.message).await?))
}

/// POST /api/v1/suggestions/:index
///
/// Sends the canned query at `index` exactly as if it had been typed.
pub async fn handle_suggestion(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ChatResponse>, AppError> {
    let query = SUGGESTIONS
        .get(index)
        .copied()
        .ok_or_else(|| AppError::NotFound(format!("Suggestion {index} not found")))?;

    Ok(Json(process_message(&state, query).await?))
}

/// GET /api/v1/suggestions
pub async fn handle_suggestions() -> Json<[&'static str; 10]> {
    Json(SUGGESTIONS)
}

/// GET /api/v1/chat/history
pub async fn handle_history(State(state): State<AppState>) -> Json<Vec<ConversationEntry>> {
    let history = state.history.lock().await;
    Json(history.entries().to_vec())
}

/// Runs one interaction.
///
/// The history lock is held for the whole turn, including the completion call
/// (up to the client's 120 s timeout), so turns are strictly sequential.
/// `GET /api/v1/chat/history` waits for an in-flight turn to finish.
async fn process_message(state: &AppState, message: &str) -> Result<ChatResponse, AppError> {
    let mut history = state.history.lock().await;

    if message.trim().is_empty() {
        return unchanged(&history);
    }

    let result = state.pipeline.resolve(message).await;
    let results_count = result.subset.len();
    let cards_html = render_job_cards(&result.subset)?;

    history.push(ConversationEntry::new(message, result.reply.clone(), results_count));
    info!("Chat turn {}: {} jobs", history.len(), results_count);

    Ok(ChatResponse {
        reply: result.reply,
        results_count,
        input: String::new(),
        chat_html: render_transcript(history.entries())?,
        cards_html,
        history_len: history.len(),
    })
}

fn unchanged(history: &ConversationHistory) -> Result<ChatResponse, AppError> {
    Ok(ChatResponse {
        reply: String::new(),
        results_count: 0,
        input: String::new(),
        chat_html: render_transcript(history.entries())?,
        cards_html: String::new(),
        history_len: history.len(),
    })
}
