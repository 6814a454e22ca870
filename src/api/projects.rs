//! Project Collection API

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Project, ProjectStatus};

#[derive(Serialize)]
pub struct ProjectPayload<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    super::get_json("/projects").await
}

pub async fn get_project(id: &str) -> Result<Project, ApiError> {
    super::get_json(&format!("/projects/{}", id)).await
}

pub async fn create_project(payload: &ProjectPayload<'_>) -> Result<Project, ApiError> {
    super::post_json("/projects", payload).await
}

pub async fn update_project(id: &str, payload: &ProjectPayload<'_>) -> Result<Project, ApiError> {
    super::put_json(&format!("/projects/{}", id), payload).await
}

/// Deleting an already-removed project is treated as success; the local row
/// was stale either way.
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    match super::delete(&format!("/projects/{}", id)).await {
        Err(err) if err.is_not_found() => Ok(()),
        other => other,
    }
}
