//! Router Tests
//!
//! Drives the API router in-process with `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::{ChatMessage, CHAT_ERROR_MESSAGE, SYSTEM_PROMPT};
    use crate::handlers::{api_router, AppState};
    use crate::llm::{ChatCompletion, LlmError, LlmResult};
    use crate::repository::InMemoryTaskRepository;

    /// Chat provider double: replies with a fixed string or fails
    struct FakeChat {
        reply: Option<String>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl FakeChat {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self { reply: Some(reply.to_string()), seen: Mutex::new(Vec::new()) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { reply: None, seen: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeChat {
        async fn complete(&self, messages: Vec<ChatMessage>) -> LlmResult<String> {
            self.seen.lock().unwrap().push(messages);
            self.reply.clone().ok_or(LlmError::EmptyChoices)
        }
    }

    fn app_with(chat: Arc<FakeChat>) -> Router {
        let state = AppState::new(Arc::new(InMemoryTaskRepository::new()), chat);
        api_router(state)
    }

    fn app() -> Router {
        app_with(FakeChat::replying("ok"))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, header::HeaderMap, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, headers, value)
    }

    fn allow_set(headers: &header::HeaderMap) -> BTreeSet<String> {
        headers
            .get(header::ALLOW)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .split(',')
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect()
    }

    #[tokio::test]
    async fn test_list_starts_empty() {
        let app = app();
        let (status, _, body) = send(&app, Method::GET, "/api/tasks", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_task_assigns_id_and_defaults() {
        let app = app();
        let (status, _, body) =
            send(&app, Method::POST, "/api/tasks", Some(json!({ "title": "x" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "x");
        assert_eq!(body["completed"], false);
        assert!(!body["id"].as_str().unwrap().is_empty());

        let (_, _, list) = send(&app, Method::GET, "/api/tasks", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], body["id"]);
    }

    #[tokio::test]
    async fn test_create_merges_caller_fields() {
        let app = app();
        let (_, _, body) = send(
            &app,
            Method::POST,
            "/api/tasks",
            Some(json!({
                "title": "健身",
                "startTime": "18:00",
                "endTime": "19:00",
                "duration": "1小时",
                "isAnytime": false
            })),
        )
        .await;

        assert_eq!(body["startTime"], "18:00");
        assert_eq!(body["endTime"], "19:00");
        assert_eq!(body["duration"], "1小时");
        assert_eq!(body["isAnytime"], false);
    }

    #[tokio::test]
    async fn test_list_returns_posts_in_insertion_order() {
        let app = app();
        for title in ["first", "second", "third"] {
            send(&app, Method::POST, "/api/tasks", Some(json!({ "title": title }))).await;
        }

        let (_, _, list) = send(&app, Method::GET, "/api/tasks", None).await;
        let titles: Vec<_> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);

        let ids: BTreeSet<_> = list.as_array().unwrap().iter().map(|t| t["id"].to_string()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_unsupported_task_methods_are_405() {
        let app = app();
        for method in [Method::PUT, Method::DELETE, Method::PATCH] {
            let (status, headers, _) = send(&app, method, "/api/tasks", None).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            let expected: BTreeSet<String> = ["GET", "POST"].iter().map(|s| s.to_string()).collect();
            assert_eq!(allow_set(&headers), expected);
        }
    }

    #[tokio::test]
    async fn test_chat_returns_provider_reply() {
        let fake = FakeChat::replying("建议先完成周报");
        let app = app_with(fake.clone());

        let (status, _, body) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "message": "今天做什么？" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "建议先完成周报");

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0][0], ChatMessage::system(SYSTEM_PROMPT));
        assert_eq!(seen[0][1], ChatMessage::user("今天做什么？"));
    }

    #[tokio::test]
    async fn test_chat_failure_is_500_with_fixed_message() {
        let app = app_with(FakeChat::failing());

        let (status, _, body) =
            send(&app, Method::POST, "/api/chat", Some(json!({ "message": "hi" }))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": CHAT_ERROR_MESSAGE }));
        assert_eq!(body["message"], "对话出错了，请稍后再试");
    }

    #[tokio::test]
    async fn test_chat_bad_body_is_500_with_fixed_message() {
        let fake = FakeChat::replying("unused");
        let app = app_with(fake.clone());

        let requests = [
            (None, "{\"message\":\"hi\"}"),
            (Some("application/json"), "not json"),
            (Some("application/json"), "{\"message\":null}"),
        ];
        for (content_type, raw) in requests {
            let mut builder = Request::builder().method(Method::POST).uri("/api/chat");
            if let Some(ct) = content_type {
                builder = builder.header(header::CONTENT_TYPE, ct);
            }
            let response = app.clone().oneshot(builder.body(Body::from(raw)).unwrap()).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "body: {raw}");

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({ "message": CHAT_ERROR_MESSAGE }));
        }

        assert!(fake.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_rejects_get() {
        let app = app();
        let (status, headers, _) = send(&app, Method::GET, "/api/chat", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(allow_set(&headers), BTreeSet::from(["POST".to_string()]));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, _, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
