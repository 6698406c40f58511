//! HTTP Layer
//!
//! axum handlers that expose the task store and chat relay to the frontend.

mod task_handler;
mod chat_handler;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::domain::TaskIdSource;
use crate::llm::ChatCompletion;
use crate::repository::TaskRepository;

pub use task_handler::{create_task, list_tasks, tasks_method_not_allowed};
pub use chat_handler::{chat, chat_method_not_allowed};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskRepository>,
    pub task_ids: Arc<TaskIdSource>,
    pub chat: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(tasks: Arc<dyn TaskRepository>, chat: Arc<dyn ChatCompletion>) -> Self {
        Self {
            tasks,
            task_ids: Arc::new(TaskIdSource::new()),
            chat,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// API routes only
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(list_tasks).post(create_task).fallback(tasks_method_not_allowed),
        )
        .route(
            "/api/chat",
            axum::routing::post(chat).fallback(chat_method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// Full application router: API, optional static frontend, tracing and CORS
pub fn router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let mut app = api_router(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
