//! Dashboard Page
//!
//! Projects and tasks load in parallel; the aggregate cards wait for both
//! to settle. A failed fetch surfaces its message without blocking the
//! other collection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::filters::TaskFilters;
use crate::models::{fmt_date, Project, Task};
use crate::session::use_session;
use crate::stats::{project_stats, task_stats, ProjectStats, TaskStats};
use crate::components::badges::{PriorityBadge, StatusBadge};
use crate::components::guard::LoadingScreen;

#[component]
fn StatCard(
    #[prop(into)] title: String,
    value: usize,
    #[prop(into)] caption: String,
    #[prop(into)] href: String,
) -> impl IntoView {
    let navigate = StoredValue::new(use_navigate());
    view! {
        <div
            class="stat-card"
            on:click=move |_| navigate.with_value(|nav| nav(&href, Default::default()))
        >
            <p class="stat-title">{title}</p>
            <p class="stat-value">{value}</p>
            <p class="stat-caption">{caption}</p>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    // None until the fetch settles; an error settles the signal with an
    // empty collection so the join can complete.
    let (projects, set_projects) = signal::<Option<Vec<Project>>>(None);
    let (tasks, set_tasks) = signal::<Option<Vec<Task>>>(None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::projects::list_projects().await {
                Ok(list) => set_projects.set(Some(list)),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_load_error.set(Some(err.to_string()));
                    }
                    set_projects.set(Some(Vec::new()));
                }
            }
        });
        spawn_local(async move {
            match api::tasks::list_tasks(&TaskFilters::default()).await {
                Ok(list) => set_tasks.set(Some(list)),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_load_error.set(Some(err.to_string()));
                    }
                    set_tasks.set(Some(Vec::new()));
                }
            }
        });
    });

    // Join point: statistics exist only once both fetches have settled.
    let stats = Memo::new(move |_| -> Option<(ProjectStats, TaskStats)> {
        let projects = projects.get()?;
        let tasks = tasks.get()?;
        let me = session.user().map(|u| u.id);
        Some((
            project_stats(&projects),
            task_stats(&tasks, me.as_deref()),
        ))
    });

    let recent_tasks = Memo::new(move |_| {
        tasks
            .get()
            .map(|list| list.into_iter().take(5).collect::<Vec<_>>())
            .unwrap_or_default()
    });

    view! {
        <div class="dashboard">
            {move || load_error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            {move || match stats.get() {
                None => view! { <LoadingScreen message="Loading dashboard..."/> }.into_any(),
                Some((projects, tasks)) => view! {
                    <div class="welcome-card">
                        <h2>
                            {move || session.user()
                                .map(|u| format!("Welcome back, {}!", u.name))}
                        </h2>
                        <p>"Here's what's happening with your projects and tasks today."</p>
                    </div>

                    <div class="stat-grid">
                        <StatCard
                            title="Total Projects"
                            value=projects.total
                            caption=format!("{} active", projects.active)
                            href="/projects"
                        />
                        <StatCard
                            title="Total Tasks"
                            value=tasks.total
                            caption=format!("{} completed", tasks.done)
                            href="/tasks"
                        />
                        <StatCard
                            title="My Tasks"
                            value=tasks.mine
                            caption="Assigned to you"
                            href="/tasks"
                        />
                        <StatCard
                            title="High Priority"
                            value=tasks.high_priority_open
                            caption="Needs attention"
                            href="/tasks"
                        />
                    </div>

                    <div class="breakdown-card">
                        <h3>"Task Status Breakdown"</h3>
                        <div class="breakdown-grid">
                            <div class="breakdown-cell">
                                <p class="breakdown-value">{tasks.todo}</p>
                                <p class="breakdown-label">"To Do"</p>
                            </div>
                            <div class="breakdown-cell">
                                <p class="breakdown-value">{tasks.in_progress}</p>
                                <p class="breakdown-label">"In Progress"</p>
                            </div>
                            <div class="breakdown-cell">
                                <p class="breakdown-value">{tasks.review}</p>
                                <p class="breakdown-label">"Review"</p>
                            </div>
                            <div class="breakdown-cell">
                                <p class="breakdown-value">{tasks.done}</p>
                                <p class="breakdown-label">"Done"</p>
                            </div>
                        </div>
                        <div class="progress-row">
                            <span>"Overall Progress"</span>
                            <span>{format!("{}%", tasks.completion_percent())}</span>
                        </div>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style=format!("width: {}%;", tasks.completion_percent())
                            ></div>
                        </div>
                    </div>
                }.into_any(),
            }}

            <div class="recent-card">
                <div class="recent-header">
                    <h3>"Recent Tasks"</h3>
                    <button
                        class="link-btn"
                        on:click=move |_| navigate.with_value(|nav| nav("/tasks", Default::default()))
                    >
                        "View All"
                    </button>
                </div>
                {move || {
                    let recent = recent_tasks.get();
                    if recent.is_empty() {
                        view! {
                            <p class="empty-state">"No tasks yet. Create your first task!"</p>
                        }.into_any()
                    } else {
                        view! {
                            <div class="recent-list">
                                <For
                                    each=move || recent_tasks.get()
                                    key=|task| task.id.clone()
                                    children=move |task| {
                                        let href = format!("/tasks/{}", task.id);
                                        let assignee = task
                                            .assigned_to
                                            .as_ref()
                                            .map(|u| u.name.clone())
                                            .unwrap_or_else(|| "Unassigned".to_string());
                                        let due = task.due_date.as_ref().map(|d| {
                                            format!("Due: {}", fmt_date(d))
                                        });
                                        view! {
                                            <div
                                                class="recent-row"
                                                on:click=move |_| navigate.with_value(|nav| {
                                                    nav(&href, Default::default())
                                                })
                                            >
                                                <div class="recent-main">
                                                    <h4>{task.title.clone()}</h4>
                                                    <p class="recent-meta">
                                                        {format!("{} • {}", task.project.title, assignee)}
                                                    </p>
                                                    {due.map(|text| view! {
                                                        <p class="recent-due">{text}</p>
                                                    })}
                                                </div>
                                                <div class="recent-badges">
                                                    <PriorityBadge priority=task.priority/>
                                                    <StatusBadge status=task.status/>
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            {move || session.user().map(|user| view! {
                <div class="profile-card">
                    <h3>"Your Profile"</h3>
                    <div class="profile-row">
                        <span class="profile-label">"Name:"</span>
                        <span>{user.name.clone()}</span>
                    </div>
                    <div class="profile-row">
                        <span class="profile-label">"Email:"</span>
                        <span>{user.email.clone()}</span>
                    </div>
                    <div class="profile-row">
                        <span class="profile-label">"Role:"</span>
                        <span>{user.role.label()}</span>
                    </div>
                </div>
            })}
        </div>
    }
}
