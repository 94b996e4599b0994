//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its payload via axum extractors, calls into the
//! engine held in AppState, and returns a JSON response.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use solace_chat::ChatExchange;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// The utterance. Required; its absence is a client error, not a
    /// deserialization failure.
    pub message: Option<String>,
    /// Optional speaker name substituted into supportive replies.
    pub speaker_name: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<ChatExchange>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// POST /chat/message - run one utterance through the responder.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ChatExchange>, ApiError> {
    let message = body
        .message
        .ok_or_else(|| ApiError::BadRequest("Message is required".to_string()))?;

    let exchange = state
        .engine
        .handle_utterance(&message, body.speaker_name.as_deref())?;

    Ok(Json(exchange))
}

/// GET /chat/history - conversation history.
///
/// Nothing is persisted, so the sequence is always empty.
pub async fn history() -> Json<HistoryResponse> {
    Json(HistoryResponse { history: vec![] })
}

/// GET /health - liveness and uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
