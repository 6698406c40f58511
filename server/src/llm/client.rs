//! Chat completion seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ChatMessage;

pub type LlmResult<T> = Result<T, LlmError>;

/// Failures talking to the chat provider
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("chat provider API key is not configured")]
    MissingApiKey,
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid chat provider response: {0}")]
    InvalidResponse(String),
    #[error("chat provider returned no choices")]
    EmptyChoices,
}

/// Anything that can turn a conversation into the assistant's reply text
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> LlmResult<String>;
}
