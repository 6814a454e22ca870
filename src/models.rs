//! Client-side Models
//!
//! Projections of server-owned records. The server is the source of truth;
//! these are replaced wholesale on re-fetch, never edited field by field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role as assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Admin,
    ProjectManager,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Admin => "Admin",
            Role::ProjectManager => "Project Manager",
        }
    }
}

/// The authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Populated user reference as embedded in projects and tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }

    /// Parse a select value. Unrecognized strings are rejected, not coerced.
    pub fn parse(value: &str) -> Option<ProjectStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub owner: UserRef,
    /// Owner is always included by the server.
    #[serde(default)]
    pub members: Vec<UserRef>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }

    /// Parse a select value. Unrecognized strings are rejected, not coerced.
    pub fn parse(value: &str) -> Option<TaskStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a select value. Unrecognized strings are rejected, not coerced.
    pub fn parse(value: &str) -> Option<Priority> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Populated project stub as embedded in a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub project: ProjectRef,
    #[serde(rename = "assignedTo", default)]
    pub assigned_to: Option<UserRef>,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "createdBy")]
    pub created_by: UserRef,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Calendar-date rendering for deadlines and timestamps.
pub fn fmt_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unrecognized_select_values_are_rejected() {
        assert_eq!(TaskStatus::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
        assert_eq!(ProjectStatus::parse("Active"), None);
    }

    #[test]
    fn task_deserializes_from_api_shape() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "title": "Write release notes",
            "status": "in_progress",
            "priority": "high",
            "project": { "_id": "p1", "title": "Launch" },
            "assignedTo": { "_id": "u1", "name": "Ada", "email": "ada@example.com" },
            "dueDate": "2026-08-20T00:00:00.000Z",
            "createdBy": { "_id": "u2", "name": "Grace", "email": "grace@example.com" },
            "createdAt": "2026-08-01T09:30:00.000Z",
            "updatedAt": "2026-08-02T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(task.id, "t1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.project.title, "Launch");
        assert_eq!(task.assigned_to.as_ref().unwrap().id, "u1");
        assert!(task.description.is_none());
    }
}
