//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO framework dependencies (serde and thiserror only).

mod entity;
mod task;
mod chat;

pub use entity::{Entity, DomainError, DomainResult};
pub use task::{Task, TaskDraft, TaskIdSource, seed_tasks};
pub use chat::{ChatMessage, ChatRequest, ChatReply, conversation_for, SYSTEM_PROMPT, CHAT_ERROR_MESSAGE};
