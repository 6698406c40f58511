//! Task Handlers
//!
//! `GET /api/tasks` lists the store, `POST /api/tasks` appends a task
//! with a server-assigned id. Anything else is 405.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};

use crate::domain::{DomainError, Task, TaskDraft};
use super::AppState;

/// List all tasks in insertion order
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, DomainError> {
    let tasks = state.tasks.list().await?;
    info!("GET /api/tasks -> {} tasks", tasks.len());
    Ok(Json(tasks))
}

/// Create a task from the caller's fields
pub async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), DomainError> {
    let task = Task::from_draft(state.task_ids.next_id(), draft);
    let created = state.tasks.append(task).await?;
    info!("POST /api/tasks -> created {} ({})", created.id, created.title);
    Ok((StatusCode::CREATED, Json(created)))
}

/// 405 for any method other than GET/POST
pub async fn tasks_method_not_allowed() -> Response {
    method_not_allowed("GET, POST")
}

pub(super) fn method_not_allowed(allow: &'static str) -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, allow)]).into_response()
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        error!("Task store error: {}", self);
        let status = match self {
            DomainError::Conflict(_) => StatusCode::CONFLICT,
        };
        (status, self.to_string()).into_response()
    }
}
