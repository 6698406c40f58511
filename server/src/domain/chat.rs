//! Chat Messages
//!
//! Request/response bodies for the chat relay and the per-request
//! conversation sent to the provider. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Fixed system prompt prepended to every conversation
pub const SYSTEM_PROMPT: &str = "你是一个贴心的任务管理助手。请用简洁友好的中文回答，\
帮助用户规划日程、拆解任务、安排优先级，并给出可以马上执行的建议。";

/// User-facing message returned when the relay fails for any reason
pub const CHAT_ERROR_MESSAGE: &str = "对话出错了，请稍后再试";

/// A single conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Build the two-message conversation for a user message
pub fn conversation_for(message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)]
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Reply body for both success and failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

impl ChatReply {
    pub fn failure() -> Self {
        Self {
            message: CHAT_ERROR_MESSAGE.to_string(),
        }
    }
}
