//! Task Detail Page
//!
//! Read view with an inline edit form seeded from the loaded task. A
//! successful update replaces the local entity; cancel restores the loaded
//! values.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::api::tasks::TaskPayload;
use crate::components::badges::{PriorityBadge, StatusBadge};
use crate::components::delete_confirm::DeleteConfirmButton;
use crate::models::{fmt_date, Priority, Task, TaskStatus, UserRef};
use crate::session::use_session;

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());
    let params = use_params_map();
    let task_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let (task, set_task) = signal::<Option<Task>>(None);
    let (members, set_members) = signal(Vec::<UserRef>::new());
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal(false);
    let fetch_seq = RwSignal::new(0u32);

    // Edit form state, seeded from the loaded task.
    let (f_title, set_f_title) = signal(String::new());
    let (f_description, set_f_description) = signal(String::new());
    let (f_assigned, set_f_assigned) = signal(String::new());
    let (f_status, set_f_status) = signal(TaskStatus::Todo);
    let (f_priority, set_f_priority) = signal(Priority::Medium);
    let (f_due, set_f_due) = signal(String::new());

    let seed_form = move |task: &Task| {
        set_f_title.set(task.title.clone());
        set_f_description.set(task.description.clone().unwrap_or_default());
        set_f_assigned.set(
            task.assigned_to
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_default(),
        );
        set_f_status.set(task.status);
        set_f_priority.set(task.priority);
        set_f_due.set(
            task.due_date
                .map(|d| d.date_naive().to_string())
                .unwrap_or_default(),
        );
    };

    Effect::new(move |_| {
        let id = task_id.get();
        if id.is_empty() {
            return;
        }
        let rid = fetch_seq.get_untracked() + 1;
        fetch_seq.set(rid);
        set_loading.set(true);
        set_not_found.set(false);
        set_error.set(None);
        set_editing.set(false);

        spawn_local(async move {
            let result = api::tasks::get_task(&id).await;
            if fetch_seq.get_untracked() != rid {
                return;
            }
            match result {
                Ok(loaded) => {
                    seed_form(&loaded);
                    let project_id = loaded.project.id.clone();
                    set_task.set(Some(loaded));
                    // Assignee options come from the parent project's roster.
                    spawn_local(async move {
                        if let Ok(project) = api::projects::get_project(&project_id).await {
                            if fetch_seq.get_untracked() == rid {
                                set_members.set(project.members);
                            }
                        }
                    });
                }
                Err(err) if err.is_not_found() => set_not_found.set(true),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = task.get_untracked() else {
            return;
        };
        let title = f_title.get();
        if title.is_empty() {
            return;
        }
        let description = f_description.get();
        let assigned = f_assigned.get();
        let status = f_status.get();
        let priority = f_priority.get();
        let due = NaiveDate::parse_from_str(&f_due.get(), "%Y-%m-%d").ok();

        set_error.set(None);
        spawn_local(async move {
            let payload = TaskPayload {
                title: &title,
                description: (!description.is_empty()).then_some(description.as_str()),
                project: &current.project.id,
                assigned_to: (!assigned.is_empty()).then_some(assigned.as_str()),
                status,
                priority,
                due_date: due,
            };
            match api::tasks::update_task(&current.id, &payload).await {
                Ok(updated) => {
                    seed_form(&updated);
                    set_task.set(Some(updated));
                    set_editing.set(false);
                }
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    let on_cancel = move |_| {
        if let Some(current) = task.get_untracked() {
            seed_form(&current);
        }
        set_editing.set(false);
    };

    let delete_task = move |_| {
        let id = task_id.get_untracked();
        spawn_local(async move {
            match api::tasks::delete_task(&id).await {
                Ok(()) => navigate.with_value(|nav| nav("/tasks", Default::default())),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    let me = move || session.user().map(|u| u.id).unwrap_or_default();

    view! {
        <div class="task-detail">
            <div class="page-header">
                <div class="page-header-left">
                    <button
                        class="back-btn"
                        on:click=move |_| navigate.with_value(|nav| {
                            nav("/tasks", Default::default())
                        })
                    >
                        "← Back"
                    </button>
                    <h2>"Task Details"</h2>
                </div>
                <div class="page-header-actions">
                    {move || (!editing.get() && task.get().is_some()).then(|| view! {
                        <button
                            class="primary-btn"
                            on:click=move |_| set_editing.set(true)
                        >
                            "Edit"
                        </button>
                    })}
                    {move || task.get().is_some().then(|| view! {
                        <DeleteConfirmButton
                            label="Delete"
                            warning="Delete this task?"
                            on_confirm=delete_task
                        />
                    })}
                </div>
            </div>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            {move || {
                if loading.get() {
                    return view! { <p class="loading-text">"Loading task..."</p> }.into_any();
                }
                if not_found.get() {
                    return view! {
                        <div class="error-banner">"Task not found"</div>
                    }.into_any();
                }
                let Some(task) = task.get() else {
                    return view! { <p class="loading-text">"Loading task..."</p> }.into_any();
                };

                if editing.get() {
                    view! {
                        <div class="form-card">
                            <form on:submit=on_update>
                                <label class="form-label">"Task Title *"</label>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || f_title.get()
                                    on:input=move |ev| set_f_title.set(event_target_value(&ev))
                                />

                                <label class="form-label">"Description"</label>
                                <textarea
                                    rows="4"
                                    prop:value=move || f_description.get()
                                    on:input=move |ev| {
                                        set_f_description.set(event_target_value(&ev))
                                    }
                                ></textarea>

                                <label class="form-label">"Assign To"</label>
                                <select
                                    prop:value=move || f_assigned.get()
                                    on:change=move |ev| {
                                        set_f_assigned.set(event_target_value(&ev))
                                    }
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

                                <div class="form-columns">
                                    <div>
                                        <label class="form-label">"Status"</label>
                                        <select
                                            prop:value=move || f_status.get().as_str()
                                            on:change=move |ev| {
                                                if let Some(parsed) =
                                                    TaskStatus::parse(&event_target_value(&ev))
                                                {
                                                    set_f_status.set(parsed);
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
                                            prop:value=move || f_priority.get().as_str()
                                            on:change=move |ev| {
                                                if let Some(parsed) =
                                                    Priority::parse(&event_target_value(&ev))
                                                {
                                                    set_f_priority.set(parsed);
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
                                    prop:value=move || f_due.get()
                                    on:input=move |ev| set_f_due.set(event_target_value(&ev))
                                />

                                <div class="form-actions">
                                    <button type="submit" class="primary-btn">"Save Changes"</button>
                                    <button type="button" class="secondary-btn" on:click=on_cancel>
                                        "Cancel"
                                    </button>
                                </div>
                            </form>
                        </div>
                    }.into_any()
                } else {
                    let project_href = format!("/projects/{}", task.project.id);
                    let assignee = task
                        .assigned_to
                        .as_ref()
                        .map(|u| format!("{} ({})", u.name, u.email))
                        .unwrap_or_else(|| "Unassigned".to_string());
                    view! {
                        <div class="detail-card">
                            <div class="task-detail-title">
                                <h3>{task.title.clone()}</h3>
                                <StatusBadge status=task.status/>
                                <PriorityBadge priority=task.priority/>
                            </div>
                            <p class="task-detail-description">
                                {task.description.clone()
                                    .unwrap_or_else(|| "No description provided".to_string())}
                            </p>

                            <div class="detail-fields">
                                <div class="detail-field">
                                    <h4>"Project"</h4>
                                    <button
                                        class="link-btn"
                                        on:click=move |_| navigate.with_value(|nav| {
                                            nav(&project_href, Default::default())
                                        })
                                    >
                                        {task.project.title.clone()}
                                    </button>
                                </div>
                                <div class="detail-field">
                                    <h4>"Assigned To"</h4>
                                    <p>{assignee}</p>
                                </div>
                                <div class="detail-field">
                                    <h4>"Created By"</h4>
                                    <p>{format!(
                                        "{} ({})",
                                        task.created_by.name, task.created_by.email
                                    )}</p>
                                </div>
                                <div class="detail-field">
                                    <h4>"Due Date"</h4>
                                    <p>{task.due_date.as_ref()
                                        .map(fmt_date)
                                        .unwrap_or_else(|| "No due date".to_string())}</p>
                                </div>
                                <div class="detail-field">
                                    <h4>"Created"</h4>
                                    <p>{fmt_date(&task.created_at)}</p>
                                </div>
                                <div class="detail-field">
                                    <h4>"Last Updated"</h4>
                                    <p>{fmt_date(&task.updated_at)}</p>
                                </div>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
