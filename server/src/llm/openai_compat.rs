//! OpenAI-compatible chat client
//!
//! Talks to `{base_url}/chat/completions` (DashScope's compatible mode by
//! default) with a bearer token, one request per call, no retries.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::ChatMessage;
use super::client::{ChatCompletion, LlmError, LlmResult};

pub const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";
pub const DEFAULT_MODEL: &str = "qwen-plus";

/// Chat provider configuration, built once at startup
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Provider API key (`DASHSCOPE_API_KEY`); requests fail without it
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
            max_tokens: None,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// reqwest-backed ChatCompletion implementation
pub struct OpenAiCompatClient {
    client: Client,
    config: ChatConfig,
}

impl OpenAiCompatClient {
    pub fn new(config: ChatConfig) -> LlmResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatCompletion for OpenAiCompatClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> LlmResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let request = CompletionRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("Chat request: model={} messages={}", self.config.model, messages.len());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Chat usage: prompt={} completion={} total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let choice = parsed.choices.into_iter().next().ok_or(LlmError::EmptyChoices)?;
        choice
            .message
            .content
            .ok_or_else(|| LlmError::InvalidResponse("choice has no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation_for;
    use httpmock::prelude::*;

    fn config_for(server: &MockServer, api_key: Option<&str>) -> ChatConfig {
        ChatConfig {
            api_key: api_key.map(str::to_string),
            base_url: server.base_url(),
            model: "qwen-test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_default() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "qwen-plus");
        assert!(config.api_key.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = OpenAiCompatClient::new(ChatConfig {
            base_url: "http://localhost:9/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .json_body_partial(r#"{"model":"qwen-test"}"#);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(
                        r#"{"choices":[{"message":{"role":"assistant","content":"先做最重要的事"}},
                            {"message":{"role":"assistant","content":"ignored"}}],
                           "usage":{"prompt_tokens":12,"completion_tokens":8,"total_tokens":20}}"#,
                    );
            })
            .await;

        let client = OpenAiCompatClient::new(config_for(&server, Some("sk-test"))).unwrap();
        let reply = client.complete(conversation_for("我该先做什么？")).await.unwrap();

        assert_eq!(reply, "先做最重要的事");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_sends_system_and_user_messages() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .body_contains(r#""role":"system""#)
                    .body_contains(r#""role":"user""#)
                    .body_contains("hello there");
                then.status(200)
                    .body(r#"{"choices":[{"message":{"content":"hi"}}]}"#);
            })
            .await;

        let client = OpenAiCompatClient::new(config_for(&server, Some("k"))).unwrap();
        let reply = client.complete(conversation_for("hello there")).await.unwrap();

        assert_eq!(reply, "hi");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body(r#"{"choices":[]}"#);
            })
            .await;

        let client = OpenAiCompatClient::new(config_for(&server, None)).unwrap();
        let err = client.complete(conversation_for("hi")).await.unwrap_err();

        assert!(matches!(err, LlmError::MissingApiKey));
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401).body("invalid api key");
            })
            .await;

        let client = OpenAiCompatClient::new(config_for(&server, Some("bad"))).unwrap();
        let err = client.complete(conversation_for("hi")).await.unwrap_err();

        match err {
            LlmError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body("not valid json");
            })
            .await;

        let client = OpenAiCompatClient::new(config_for(&server, Some("k"))).unwrap();
        let err = client.complete(conversation_for("hi")).await.unwrap_err();

        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body(r#"{"choices":[]}"#);
            })
            .await;

        let client = OpenAiCompatClient::new(config_for(&server, Some("k"))).unwrap();
        let err = client.complete(conversation_for("hi")).await.unwrap_err();

        assert!(matches!(err, LlmError::EmptyChoices));
    }
}
