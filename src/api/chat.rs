//! Chat Endpoint
//!
//! Binding for `POST /api/chat`. The relay answers errors with the same
//! `{ message }` shape, so a failed call yields the server's message as `Err`.

use crate::models::{ChatReply, ChatRequest};
use super::api_url;

/// Shown when the relay could not be reached at all
const UNREACHABLE_MESSAGE: &str = "网络异常，请检查连接";

pub async fn send_chat(message: &str) -> Result<String, String> {
    let response = reqwest::Client::new()
        .post(api_url("/api/chat"))
        .json(&ChatRequest { message })
        .send()
        .await
        .map_err(|_| UNREACHABLE_MESSAGE.to_string())?;

    let ok = response.status().is_success();
    let reply: ChatReply = response
        .json()
        .await
        .map_err(|_| UNREACHABLE_MESSAGE.to_string())?;

    if ok {
        Ok(reply.message)
    } else {
        Err(reply.message)
    }
}
