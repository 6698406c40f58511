//! Chat Relay Handler
//!
//! Forwards one user message (plus the fixed system prompt) to the chat
//! provider and returns the reply text. Every failure collapses into a
//! single user-facing message.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use log::{error, info};

use crate::domain::{conversation_for, ChatReply, ChatRequest};
use super::task_handler::method_not_allowed;
use super::AppState;

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatReply>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!("Chat request rejected: {}", rejection.body_text());
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply::failure()));
        }
    };
    info!("POST /api/chat ({} chars)", request.message.chars().count());

    match state.chat.complete(conversation_for(&request.message)).await {
        Ok(message) => (StatusCode::OK, Json(ChatReply { message })),
        Err(e) => {
            error!("Chat relay failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply::failure()))
        }
    }
}

pub async fn chat_method_not_allowed() -> Response {
    method_not_allowed("POST")
}
