//! Chat Provider Layer
//!
//! Abstraction over the external chat-completion API and the
//! OpenAI-compatible client used against DashScope.

mod client;
mod openai_compat;

pub use client::{ChatCompletion, LlmError, LlmResult};
pub use openai_compat::{ChatConfig, OpenAiCompatClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
