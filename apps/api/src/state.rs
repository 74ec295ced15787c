use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::conversation::ConversationHistory;
use crate::search::pipeline::ResolutionPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded table, keyword chain and optional LLM resolver. Immutable after startup.
    pub pipeline: Arc<ResolutionPipeline>,
    /// The single chat session's transcript.
    pub history: Arc<Mutex<ConversationHistory>>,
}

impl AppState {
    pub fn new(pipeline: ResolutionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            history: Arc::new(Mutex::new(ConversationHistory::default())),
        }
    }
}
