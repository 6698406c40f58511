//! Task Endpoints
//!
//! Bindings for `GET /api/tasks` and `POST /api/tasks`.

use crate::models::{NewTask, Task};
use super::api_url;

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let response = reqwest::get(api_url("/api/tasks"))
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("加载任务失败 ({})", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_task(task: &NewTask) -> Result<Task, String> {
    let response = reqwest::Client::new()
        .post(api_url("/api/tasks"))
        .json(task)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("创建任务失败 ({})", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}
