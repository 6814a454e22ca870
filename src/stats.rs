//! Aggregate Statistics
//!
//! Computed from the full unfiltered collection. Filters affect what is
//! listed, not what is summarized; the only identity-scoped figure is the
//! "my tasks" count, which matches on assignee.

use crate::models::{Priority, Project, ProjectStatus, Task, TaskStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub review: usize,
    pub done: usize,
    /// High-priority tasks that are not done yet.
    pub high_priority_open: usize,
    /// Tasks assigned to the session user.
    pub mine: usize,
}

impl TaskStats {
    pub fn completion_percent(&self) -> u32 {
        completion_percent(self.done, self.total)
    }
}

pub fn task_stats(tasks: &[Task], current_user: Option<&str>) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..Default::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Todo => stats.todo += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Review => stats.review += 1,
            TaskStatus::Done => stats.done += 1,
        }
        if task.priority == Priority::High && task.status != TaskStatus::Done {
            stats.high_priority_open += 1;
        }
        if let (Some(me), Some(assignee)) = (current_user, task.assigned_to.as_ref()) {
            if assignee.id == me {
                stats.mine += 1;
            }
        }
    }
    stats
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
}

pub fn project_stats(projects: &[Project]) -> ProjectStats {
    ProjectStats {
        total: projects.len(),
        active: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
    }
}

/// done / total, rounded to the nearest whole percent. Zero for an empty
/// collection.
pub fn completion_percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::{ProjectRef, UserRef};

    fn make_task(status: TaskStatus, priority: Priority, assignee: Option<&str>) -> Task {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        Task {
            id: "t".to_string(),
            title: "Task".to_string(),
            description: None,
            status,
            priority,
            project: ProjectRef {
                id: "p1".to_string(),
                title: "Apollo".to_string(),
            },
            assigned_to: assignee.map(|id| UserRef {
                id: id.to_string(),
                name: "Someone".to_string(),
                email: "someone@example.com".to_string(),
            }),
            due_date: None,
            created_by: UserRef {
                id: "creator".to_string(),
                name: "Creator".to_string(),
                email: "creator@example.com".to_string(),
            },
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn status_counts_sum_to_total() {
        let tasks = vec![
            make_task(TaskStatus::Todo, Priority::Low, None),
            make_task(TaskStatus::InProgress, Priority::Medium, None),
            make_task(TaskStatus::Review, Priority::High, None),
            make_task(TaskStatus::Done, Priority::High, None),
            make_task(TaskStatus::Done, Priority::Low, None),
        ];
        let stats = task_stats(&tasks, None);
        assert_eq!(
            stats.todo + stats.in_progress + stats.review + stats.done,
            stats.total
        );
    }

    #[test]
    fn completion_percent_is_zero_for_empty_and_rounded_otherwise() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(3, 3), 100);

        let stats = task_stats(&[], None);
        assert_eq!(stats.completion_percent(), 0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn high_priority_open_excludes_done_tasks() {
        let tasks = vec![
            make_task(TaskStatus::Todo, Priority::High, None),
            make_task(TaskStatus::Done, Priority::High, None),
        ];
        assert_eq!(task_stats(&tasks, None).high_priority_open, 1);
    }

    #[test]
    fn mine_counts_assignee_matches_only() {
        // Assignee-only scoping; tasks the user merely created don't count.
        let tasks = vec![
            make_task(TaskStatus::Todo, Priority::Low, Some("me")),
            make_task(TaskStatus::Todo, Priority::Low, Some("someone-else")),
            make_task(TaskStatus::Todo, Priority::Low, None),
        ];
        assert_eq!(task_stats(&tasks, Some("me")).mine, 1);
        assert_eq!(task_stats(&tasks, None).mine, 0);
    }

    #[test]
    fn project_stats_track_active_count() {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let owner = UserRef {
            id: "u1".to_string(),
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
        };
        let project = |status| Project {
            id: "p".to_string(),
            title: "P".to_string(),
            description: None,
            status,
            owner: owner.clone(),
            members: vec![owner.clone()],
            deadline: None,
            created_at: stamp,
        };
        let projects = vec![
            project(ProjectStatus::Active),
            project(ProjectStatus::Completed),
            project(ProjectStatus::Archived),
        ];
        let stats = project_stats(&projects);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
    }
}
