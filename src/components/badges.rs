//! Status and Priority Badges

use leptos::prelude::*;

use crate::models::{Priority, ProjectStatus, TaskStatus};

#[component]
pub fn StatusBadge(status: TaskStatus) -> impl IntoView {
    let class = match status {
        TaskStatus::Todo => "badge status-todo",
        TaskStatus::InProgress => "badge status-in-progress",
        TaskStatus::Review => "badge status-review",
        TaskStatus::Done => "badge status-done",
    };
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    let class = match priority {
        Priority::Low => "badge priority-low",
        Priority::Medium => "badge priority-medium",
        Priority::High => "badge priority-high",
    };
    view! { <span class=class>{priority.label()}</span> }
}

#[component]
pub fn ProjectStatusBadge(status: ProjectStatus) -> impl IntoView {
    let class = match status {
        ProjectStatus::Active => "badge project-active",
        ProjectStatus::Completed => "badge project-completed",
        ProjectStatus::Archived => "badge project-archived",
    };
    view! { <span class=class>{status.label()}</span> }
}
