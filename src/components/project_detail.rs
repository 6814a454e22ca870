//! Project Detail Page
//!
//! Project record and its task overview load per route param; responses from
//! a superseded param are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::api::projects::ProjectPayload;
use crate::components::badges::{PriorityBadge, ProjectStatusBadge, StatusBadge};
use crate::components::delete_confirm::DeleteConfirmButton;
use crate::filters::TaskFilters;
use crate::models::{fmt_date, Project, ProjectStatus, Task};
use crate::session::use_session;
use crate::stats::task_stats;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let (project, set_project) = signal::<Option<Project>>(None);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let fetch_seq = RwSignal::new(0u32);

    Effect::new(move |_| {
        let id = project_id.get();
        if id.is_empty() {
            return;
        }
        let rid = fetch_seq.get_untracked() + 1;
        fetch_seq.set(rid);
        set_loading.set(true);
        set_not_found.set(false);
        set_error.set(None);

        spawn_local({
            let id = id.clone();
            async move {
                let result = api::projects::get_project(&id).await;
                if fetch_seq.get_untracked() != rid {
                    return;
                }
                match result {
                    Ok(loaded) => set_project.set(Some(loaded)),
                    Err(err) if err.is_not_found() => set_not_found.set(true),
                    Err(err) => {
                        if !session.expire_if_unauthorized(&err) {
                            set_error.set(Some(err.to_string()));
                        }
                    }
                }
                set_loading.set(false);
            }
        });
        spawn_local(async move {
            let filters = TaskFilters {
                project: Some(id),
                ..Default::default()
            };
            let result = api::tasks::list_tasks(&filters).await;
            if fetch_seq.get_untracked() != rid {
                return;
            }
            if let Ok(list) = result {
                set_tasks.set(list);
            }
        });
    });

    let overview = Memo::new(move |_| task_stats(&tasks.get(), None));

    let change_status = move |value: String| {
        let Some(new_status) = ProjectStatus::parse(&value) else {
            return;
        };
        let Some(current) = project.get_untracked() else {
            return;
        };
        if current.status == new_status {
            return;
        }
        spawn_local(async move {
            let payload = ProjectPayload {
                title: &current.title,
                description: current.description.as_deref(),
                status: new_status,
                deadline: current.deadline.map(|d| d.date_naive()),
            };
            match api::projects::update_project(&current.id, &payload).await {
                Ok(updated) => set_project.set(Some(updated)),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    let delete_project = move |_| {
        let id = project_id.get_untracked();
        spawn_local(async move {
            match api::projects::delete_project(&id).await {
                Ok(()) => navigate.with_value(|nav| nav("/projects", Default::default())),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    view! {
        <div class="project-detail">
            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            {move || {
                if loading.get() {
                    return view! { <p class="loading-text">"Loading project..."</p> }.into_any();
                }
                if not_found.get() {
                    return view! {
                        <div class="error-banner">"Project not found"</div>
                    }.into_any();
                }
                let Some(project) = project.get() else {
                    return view! { <p class="loading-text">"Loading project..."</p> }.into_any();
                };
                let stats = overview.get();
                let owner_id = project.owner.id.clone();
                let add_task_href = format!("/tasks/new?project={}", project.id);
                let members = project.members.clone();
                view! {
                    <div class="page-header">
                        <div class="page-header-left">
                            <button
                                class="back-btn"
                                on:click=move |_| navigate.with_value(|nav| {
                                    nav("/projects", Default::default())
                                })
                            >
                                "← Back"
                            </button>
                            <h2>{project.title.clone()}</h2>
                            <ProjectStatusBadge status=project.status/>
                        </div>
                        <div class="page-header-actions">
                            <select
                                prop:value=project.status.as_str()
                                on:change=move |ev| change_status(event_target_value(&ev))
                            >
                                {ProjectStatus::ALL.iter().map(|s| view! {
                                    <option value=s.as_str()>{s.label()}</option>
                                }).collect_view()}
                            </select>
                            <DeleteConfirmButton
                                label="Delete Project"
                                warning="Delete this project? All tasks will be lost."
                                on_confirm=delete_project
                            />
                        </div>
                    </div>

                    <div class="detail-columns">
                        <div class="detail-main">
                            <div class="detail-card">
                                <h3>"Project Details"</h3>
                                <p class="detail-field">
                                    <span class="detail-label">"Description: "</span>
                                    {project.description.clone()
                                        .unwrap_or_else(|| "No description".to_string())}
                                </p>
                                <p class="detail-field">
                                    <span class="detail-label">"Owner: "</span>
                                    {format!("{} ({})", project.owner.name, project.owner.email)}
                                </p>
                                {project.deadline.as_ref().map(|deadline| view! {
                                    <p class="detail-field">
                                        <span class="detail-label">"Deadline: "</span>
                                        {fmt_date(deadline)}
                                    </p>
                                })}
                                <p class="detail-field">
                                    <span class="detail-label">"Created: "</span>
                                    {fmt_date(&project.created_at)}
                                </p>
                            </div>

                            <div class="detail-card">
                                <div class="detail-card-header">
                                    <h3>"Task Overview"</h3>
                                    <button
                                        class="primary-btn"
                                        on:click=move |_| navigate.with_value(|nav| {
                                            nav(&add_task_href, Default::default())
                                        })
                                    >
                                        "+ Add Task"
                                    </button>
                                </div>
                                <div class="overview-grid">
                                    <div class="overview-cell">
                                        <p class="overview-value">{stats.total}</p>
                                        <p class="overview-label">"Total"</p>
                                    </div>
                                    <div class="overview-cell">
                                        <p class="overview-value">{stats.todo}</p>
                                        <p class="overview-label">"To Do"</p>
                                    </div>
                                    <div class="overview-cell">
                                        <p class="overview-value">{stats.in_progress}</p>
                                        <p class="overview-label">"In Progress"</p>
                                    </div>
                                    <div class="overview-cell">
                                        <p class="overview-value">{stats.review}</p>
                                        <p class="overview-label">"Review"</p>
                                    </div>
                                    <div class="overview-cell">
                                        <p class="overview-value">{stats.done}</p>
                                        <p class="overview-label">"Done"</p>
                                    </div>
                                </div>
                            </div>

                            <div class="detail-card">
                                <h3>"Tasks"</h3>
                                {move || if tasks.get().is_empty() {
                                    view! {
                                        <p class="empty-state">
                                            "No tasks yet. Create your first task!"
                                        </p>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div class="task-rows">
                                            <For
                                                each=move || tasks.get()
                                                key=|task| task.id.clone()
                                                children=move |task| {
                                                    let href = format!("/tasks/{}", task.id);
                                                    let assignee = task.assigned_to.as_ref()
                                                        .map(|u| format!("Assigned to: {}", u.name));
                                                    view! {
                                                        <div
                                                            class="task-row"
                                                            on:click=move |_| navigate.with_value(|nav| {
                                                                nav(&href, Default::default())
                                                            })
                                                        >
                                                            <div class="task-row-main">
                                                                <h4>{task.title.clone()}</h4>
                                                                <p class="task-row-description">
                                                                    {task.description.clone()
                                                                        .unwrap_or_default()}
                                                                </p>
                                                                {assignee.map(|text| view! {
                                                                    <p class="task-row-meta">{text}</p>
                                                                })}
                                                            </div>
                                                            <div class="task-row-badges">
                                                                <PriorityBadge priority=task.priority/>
                                                                <StatusBadge status=task.status/>
                                                            </div>
                                                        </div>
                                                    }
                                                }
                                            />
                                        </div>
                                    }.into_any()
                                }}
                            </div>
                        </div>

                        <div class="detail-side">
                            <div class="detail-card">
                                <h3>"Team Members"</h3>
                                <div class="member-list">
                                    {members.into_iter().map(|member| {
                                        let initial = member
                                            .name
                                            .chars()
                                            .next()
                                            .map(|c| c.to_uppercase().to_string())
                                            .unwrap_or_default();
                                        let is_owner = member.id == owner_id;
                                        view! {
                                            <div class="member-row">
                                                <div class="member-avatar">{initial}</div>
                                                <div class="member-info">
                                                    <p class="member-name">{member.name.clone()}</p>
                                                    <p class="member-email">{member.email.clone()}</p>
                                                </div>
                                                {is_owner.then(|| view! {
                                                    <span class="badge owner-badge">"Owner"</span>
                                                })}
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
