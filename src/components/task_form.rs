//! Task Form Page
//!
//! Create form. Choosing a project loads that project's members for the
//! assignee select; `?project=` preselects one.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api;
use crate::api::tasks::TaskPayload;
use crate::models::{Priority, Project, TaskStatus, UserRef};
use crate::session::use_session;

#[component]
pub fn TaskFormPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());
    let query = use_query_map();
    let preselected = query.with_untracked(|q| q.get("project").unwrap_or_default());

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (project_id, set_project_id) = signal(preselected);
    let (assigned_to, set_assigned_to) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Todo);
    let (priority, set_priority) = signal(Priority::Medium);
    let (due_date, set_due_date) = signal(String::new());

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (members, set_members) = signal(Vec::<UserRef>::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::projects::list_projects().await {
                set_projects.set(list);
            }
        });
    });

    // Member options follow the selected project; a response for a project
    // the user has already navigated away from is dropped.
    Effect::new(move |_| {
        let id = project_id.get();
        if id.is_empty() {
            set_members.set(Vec::new());
            set_assigned_to.set(String::new());
            return;
        }
        spawn_local(async move {
            let result = api::projects::get_project(&id).await;
            if project_id.get_untracked() != id {
                return;
            }
            if let Ok(project) = result {
                set_members.set(project.members);
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let project = project_id.get();
        if title.is_empty() || project.is_empty() {
            return;
        }
        let description = description.get();
        let assigned_to = assigned_to.get();
        let status = status.get();
        let priority = priority.get();
        let due_date = NaiveDate::parse_from_str(&due_date.get(), "%Y-%m-%d").ok();

        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            let payload = TaskPayload {
                title: &title,
                description: (!description.is_empty()).then_some(description.as_str()),
                project: &project,
                assigned_to: (!assigned_to.is_empty()).then_some(assigned_to.as_str()),
                status,
                priority,
                due_date,
            };
            match api::tasks::create_task(&payload).await {
                Ok(_) => navigate.with_value(|nav| nav("/tasks", Default::default())),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
            set_pending.set(false);
        });
    };

    let me = move || session.user().map(|u| u.id).unwrap_or_default();

    view! {
        <div class="form-page">
            <div class="page-header">
                <button
                    class="back-btn"
                    on:click=move |_| navigate.with_value(|nav| {
                        nav("/tasks", Default::default())
                    })
                >
                    "← Back"
                </button>
                <h2>"Create New Task"</h2>
            </div>

            <div class="form-card">
                <form on:submit=on_submit>
                    {move || error.get().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <label class="form-label">"Task Title *"</label>
                    <input
                        type="text"
                        required
                        placeholder="Enter task title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Description"</label>
                    <textarea
                        rows="4"
                        placeholder="Enter task description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <label class="form-label">"Project *"</label>
                    <select
                        required
                        prop:value=move || project_id.get()
                        on:change=move |ev| set_project_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a project"</option>
                        <For
                            each=move || projects.get()
                            key=|project| project.id.clone()
                            children=|project| view! {
                                <option value=project.id.clone()>{project.title.clone()}</option>
                            }
                        />
                    </select>

                    <label class="form-label">"Assign To"</label>
                    <select
                        disabled=move || project_id.get().is_empty()
                        prop:value=move || assigned_to.get()
                        on:change=move |ev| set_assigned_to.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        <For
                            each=move || members.get()
                            key=|member| member.id.clone()
                            children=move |member| {
                                let label = if member.id == me() {
                                    format!("{} (You)", member.name)
                                } else {
                                    member.name.clone()
                                };
                                view! {
                                    <option value=member.id.clone()>{label}</option>
                                }
                            }
                        />
                    </select>
                    {move || project_id.get().is_empty().then(|| view! {
                        <p class="form-hint">"Select a project first to assign task"</p>
                    })}

                    <div class="form-columns">
                        <div>
                            <label class="form-label">"Status"</label>
                            <select
                                prop:value=move || status.get().as_str()
                                on:change=move |ev| {
                                    if let Some(parsed) =
                                        TaskStatus::parse(&event_target_value(&ev))
                                    {
                                        set_status.set(parsed);
                                    }
                                }
                            >
                                {TaskStatus::ALL.iter().map(|s| view! {
                                    <option value=s.as_str()>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="form-label">"Priority"</label>
                            <select
                                prop:value=move || priority.get().as_str()
                                on:change=move |ev| {
                                    if let Some(parsed) =
                                        Priority::parse(&event_target_value(&ev))
                                    {
                                        set_priority.set(parsed);
                                    }
                                }
                            >
                                {Priority::ALL.iter().map(|p| view! {
                                    <option value=p.as_str()>{p.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <label class="form-label">"Due Date"</label>
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />

                    <div class="form-actions">
                        <button type="submit" class="primary-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "Creating..." } else { "Create Task" }}
                        </button>
                        <button
                            type="button"
                            class="secondary-btn"
                            on:click=move |_| navigate.with_value(|nav| {
                                nav("/tasks", Default::default())
                            })
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
