//! View Filters
//!
//! Equality filters plus free-text search over a fetched collection.
//! Filtering is conjunctive: an item is visible iff every pinned dimension
//! matches and at least one searchable field contains the query.

use crate::models::{Priority, Project, ProjectStatus, Task, TaskStatus};

/// Filter state for the task list. Lives in view memory only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskFilters {
    /// Project id, pinned or unset.
    pub project: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    /// Matched case-insensitively against title, description and the parent
    /// project's title. Never sent to the server.
    pub query: String,
}

impl TaskFilters {
    /// Reset every dimension and the query in a single assignment.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(project) = &self.project {
            if task.project.id != *project {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        matches_query(
            &self.query,
            [
                Some(task.title.as_str()),
                task.description.as_deref(),
                Some(task.project.title.as_str()),
            ],
        )
    }
}

/// Filter state for the project list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFilters {
    pub status: Option<ProjectStatus>,
    /// Matched against title and description.
    pub query: String,
}

impl ProjectFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        matches_query(
            &self.query,
            [Some(project.title.as_str()), project.description.as_deref()],
        )
    }
}

/// Case-insensitive substring match over the entity's searchable fields.
/// An empty query matches everything.
fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_tasks(tasks: &[Task], filters: &TaskFilters) -> Vec<Task> {
    tasks.iter().filter(|t| filters.matches(t)).cloned().collect()
}

pub fn filter_projects(projects: &[Project], filters: &ProjectFilters) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::{ProjectRef, UserRef};

    fn user(id: &str) -> UserRef {
        UserRef {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
        }
    }

    fn make_task(id: &str, status: TaskStatus, priority: Priority) -> Task {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status,
            priority,
            project: ProjectRef {
                id: "p1".to_string(),
                title: "Apollo".to_string(),
            },
            assigned_to: None,
            due_date: None,
            created_by: user("creator"),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn empty_filters_keep_original_order() {
        let tasks = vec![
            make_task("1", TaskStatus::Todo, Priority::High),
            make_task("2", TaskStatus::Done, Priority::Low),
            make_task("3", TaskStatus::Review, Priority::Medium),
        ];
        let visible = filter_tasks(&tasks, &TaskFilters::default());
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn status_filter_returns_only_matching_tasks() {
        let tasks = vec![
            make_task("1", TaskStatus::Todo, Priority::High),
            make_task("2", TaskStatus::Done, Priority::Low),
        ];
        let filters = TaskFilters {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let visible = filter_tasks(&tasks, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        let none = filter_tasks(
            &tasks,
            &TaskFilters {
                status: Some(TaskStatus::InProgress),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn equality_filters_and_query_compose() {
        let mut done = make_task("2", TaskStatus::Done, Priority::Low);
        done.description = Some("low effort cleanup".to_string());
        let tasks = vec![make_task("1", TaskStatus::Todo, Priority::High), done];

        let by_status = TaskFilters {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let visible = filter_tasks(&tasks, &by_status);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        // Adding a query that also hits task 2 narrows to the same result.
        let with_query = TaskFilters {
            status: Some(TaskStatus::Done),
            query: "low".to_string(),
            ..Default::default()
        };
        let visible = filter_tasks(&tasks, &with_query);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        // A query with no hit empties the result even when the status matches.
        let no_hit = TaskFilters {
            status: Some(TaskStatus::Done),
            query: "unrelated".to_string(),
            ..Default::default()
        };
        assert!(filter_tasks(&tasks, &no_hit).is_empty());
    }

    #[test]
    fn query_matches_are_a_subset_with_a_hit_in_a_searchable_field() {
        let mut with_description = make_task("2", TaskStatus::Todo, Priority::Low);
        with_description.description = Some("Fix the LOGIN flow".to_string());
        let tasks = vec![
            make_task("1", TaskStatus::Todo, Priority::High),
            with_description,
        ];

        let filters = TaskFilters {
            query: "login".to_string(),
            ..Default::default()
        };
        let visible = filter_tasks(&tasks, &filters);
        assert_eq!(visible.len(), 1);
        for task in &visible {
            let hit = task.title.to_lowercase().contains("login")
                || task
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains("login"))
                || task.project.title.to_lowercase().contains("login");
            assert!(hit);
        }
    }

    #[test]
    fn query_reaches_the_parent_project_title() {
        let tasks = vec![make_task("1", TaskStatus::Todo, Priority::High)];
        let filters = TaskFilters {
            query: "apollo".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&tasks, &filters).len(), 1);
    }

    #[test]
    fn project_filter_on_a_vanished_id_matches_nothing() {
        let tasks = vec![make_task("1", TaskStatus::Todo, Priority::High)];
        let filters = TaskFilters {
            project: Some("deleted-project".to_string()),
            ..Default::default()
        };
        assert!(filter_tasks(&tasks, &filters).is_empty());
    }

    #[test]
    fn clear_is_idempotent_and_resets_everything() {
        let mut filters = TaskFilters {
            project: Some("p1".to_string()),
            status: Some(TaskStatus::Review),
            priority: Some(Priority::High),
            query: "launch".to_string(),
        };
        filters.clear();
        assert!(filters.is_default());
        let once = filters.clone();
        filters.clear();
        assert_eq!(filters, once);
    }
}
