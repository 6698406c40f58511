//! Frontend Models
//!
//! Data structures matching the backend JSON.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub is_anytime: Option<bool>,
}

impl Task {
    /// Time column text: "07:30 - 08:00", "07:30 开始", or "随时"
    pub fn time_label(&self) -> String {
        if self.is_anytime.unwrap_or(false) {
            return "随时".to_string();
        }
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            (Some(start), None) => format!("{} 开始", start),
            (None, Some(end)) => format!("{} 截止", end),
            (None, None) => "随时".to_string(),
        }
    }
}

/// Body for creating a task
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub is_anytime: bool,
}

/// Who wrote a chat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the chat log (kept client-side only)
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub id: u32,
    pub role: ChatRole,
    pub content: String,
    /// Relay failed; content is the server's error message
    pub is_error: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub message: String,
}
