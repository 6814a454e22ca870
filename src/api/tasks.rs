//! Task Collection API

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ApiError;
use crate::filters::TaskFilters;
use crate::models::{Priority, Task, TaskStatus};

#[derive(Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub project: &'a str,
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<&'a str>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// List tasks matching the equality dimensions of `filters`. The free-text
/// query is client-side only and never leaves the view.
pub async fn list_tasks(filters: &TaskFilters) -> Result<Vec<Task>, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(project) = &filters.project {
        query.push(("project", project.clone()));
    }
    if let Some(status) = filters.status {
        query.push(("status", status.as_str().to_string()));
    }
    if let Some(priority) = filters.priority {
        query.push(("priority", priority.as_str().to_string()));
    }
    super::get_json_with_query("/tasks", &query).await
}

pub async fn get_task(id: &str) -> Result<Task, ApiError> {
    super::get_json(&format!("/tasks/{}", id)).await
}

pub async fn create_task(payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    super::post_json("/tasks", payload).await
}

pub async fn update_task(id: &str, payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    super::put_json(&format!("/tasks/{}", id), payload).await
}

/// Deleting an already-removed task is treated as success; the local row
/// was stale either way.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    match super::delete(&format!("/tasks/{}", id)).await {
        Err(err) if err.is_not_found() => Ok(()),
        other => other,
    }
}
