//! Task List Page
//!
//! Equality filters re-query the server; the free-text search narrows the
//! loaded collection locally on every keystroke. Responses that arrive for
//! an outdated filter snapshot are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::collection;
use crate::components::badges::{PriorityBadge, StatusBadge};
use crate::components::delete_confirm::DeleteConfirmButton;
use crate::filters::{filter_tasks, TaskFilters};
use crate::models::{fmt_date, Priority, Project, Task, TaskStatus};
use crate::session::use_session;

#[component]
pub fn TaskListPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (filters, set_filters) = signal(TaskFilters::default());
    // Monotonic request id; a response is applied only if it is still the
    // latest issued fetch.
    let fetch_seq = RwSignal::new(0u32);

    // Projects feed the filter dropdown; one load per mount.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::projects::list_projects().await {
                set_projects.set(list);
            }
        });
    });

    // Only the equality dimensions reach the server. Typing in the search
    // box changes `filters` but not this memo, so it never triggers a fetch.
    let equality = Memo::new(move |_| {
        filters.with(|f| (f.project.clone(), f.status, f.priority))
    });

    Effect::new(move |_| {
        let (project, status, priority) = equality.get();
        let rid = fetch_seq.get_untracked() + 1;
        fetch_seq.set(rid);
        set_loading.set(true);
        spawn_local(async move {
            let snapshot = TaskFilters {
                project,
                status,
                priority,
                query: String::new(),
            };
            let result = api::tasks::list_tasks(&snapshot).await;
            if fetch_seq.get_untracked() != rid {
                // Superseded by a newer filter state.
                return;
            }
            match result {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[TASKS] Loaded {} tasks, request {}", list.len(), rid).into(),
                    );
                    set_tasks.set(list);
                }
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| filter_tasks(&tasks.get(), &filters.get()));

    let delete_task = move |id: String| {
        spawn_local(async move {
            match api::tasks::delete_task(&id).await {
                Ok(()) => set_tasks.update(|list| collection::remove(list, &id)),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    view! {
        <div class="task-list">
            <div class="page-header">
                <h2>"Tasks"</h2>
                <button
                    class="primary-btn"
                    on:click=move |_| navigate.with_value(|nav| {
                        nav("/tasks/new", Default::default())
                    })
                >
                    "+ New Task"
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <div class="filter-bar">
                <div class="filter-field">
                    <label class="form-label">"Project"</label>
                    <select
                        prop:value=move || filters.with(|f| {
                            f.project.clone().unwrap_or_default()
                        })
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_filters.update(|f| {
                                f.project = (!value.is_empty()).then_some(value);
                            });
                        }
                    >
                        <option value="">"All Projects"</option>
                        <For
                            each=move || projects.get()
                            key=|project| project.id.clone()
                            children=|project| view! {
                                <option value=project.id.clone()>{project.title.clone()}</option>
                            }
                        />
                    </select>
                </div>

                <div class="filter-field">
                    <label class="form-label">"Status"</label>
                    <select
                        prop:value=move || filters.with(|f| {
                            f.status.map(|s| s.as_str()).unwrap_or("")
                        })
                        on:change=move |ev| {
                            let status = TaskStatus::parse(&event_target_value(&ev));
                            set_filters.update(|f| f.status = status);
                        }
                    >
                        <option value="">"All Status"</option>
                        {TaskStatus::ALL.iter().map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="filter-field">
                    <label class="form-label">"Priority"</label>
                    <select
                        prop:value=move || filters.with(|f| {
                            f.priority.map(|p| p.as_str()).unwrap_or("")
                        })
                        on:change=move |ev| {
                            let priority = Priority::parse(&event_target_value(&ev));
                            set_filters.update(|f| f.priority = priority);
                        }
                    >
                        <option value="">"All Priority"</option>
                        {Priority::ALL.iter().map(|priority| view! {
                            <option value=priority.as_str()>{priority.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="filter-field filter-actions">
                    // Single atomic reset; every dimension and the query
                    // change in one update.
                    <button
                        class="secondary-btn"
                        on:click=move |_| set_filters.update(|f| f.clear())
                    >
                        "Clear Filters"
                    </button>
                </div>
            </div>

            <input
                class="search-input"
                type="text"
                placeholder="Search tasks by title or description..."
                prop:value=move || filters.with(|f| f.query.clone())
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_filters.update(|f| f.query = input.value());
                }
            />

            {move || if loading.get() {
                view! { <p class="loading-text">"Loading tasks..."</p> }.into_any()
            } else if visible.get().is_empty() {
                view! {
                    <div class="empty-card">
                        <p>"No tasks found"</p>
                        <button
                            class="primary-btn"
                            on:click=move |_| navigate.with_value(|nav| {
                                nav("/tasks/new", Default::default())
                            })
                        >
                            "Create Your First Task"
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="task-rows">
                        <For
                            each=move || visible.get()
                            key=|task| task.id.clone()
                            children=move |task| {
                                let id = task.id.clone();
                                let href = format!("/tasks/{}", task.id);
                                let assignee = task.assigned_to.as_ref().map(|u| u.name.clone());
                                let due = task.due_date.as_ref().map(|d| fmt_date(d));
                                view! {
                                    <div
                                        class="task-row"
                                        on:click=move |_| navigate.with_value(|nav| {
                                            nav(&href, Default::default())
                                        })
                                    >
                                        <div class="task-row-main">
                                            <div class="task-row-title">
                                                <h3>{task.title.clone()}</h3>
                                                <StatusBadge status=task.status/>
                                                <PriorityBadge priority=task.priority/>
                                            </div>
                                            <p class="task-row-description">
                                                {task.description.clone()
                                                    .unwrap_or_else(|| "No description".to_string())}
                                            </p>
                                            <div class="task-row-meta">
                                                <span>{task.project.title.clone()}</span>
                                                {assignee.map(|name| view! {
                                                    <span>{name}</span>
                                                })}
                                                {due.map(|date| view! {
                                                    <span>{date}</span>
                                                })}
                                            </div>
                                        </div>
                                        <DeleteConfirmButton
                                            label="Delete"
                                            warning="Delete this task?"
                                            on_confirm=move |_| delete_task(id.clone())
                                        />
                                    </div>
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}
