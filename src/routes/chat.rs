// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::state::SharedState;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Configuration is checked before the message so the status does not
    // depend on the body content.
    let relay = state.relay.as_ref().ok_or(AppError::MissingApiKey)?;

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let reply = relay.reply(trimmed).await?;
    Ok(Json(ChatResponse { reply }))
}

// Any non-POST method on the chat route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
