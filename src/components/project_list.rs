//! Project List Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::collection;
use crate::components::badges::ProjectStatusBadge;
use crate::components::delete_confirm::DeleteConfirmButton;
use crate::filters::{filter_projects, ProjectFilters};
use crate::models::{fmt_date, Project, ProjectStatus};
use crate::session::use_session;

#[component]
pub fn ProjectListPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (filters, set_filters) = signal(ProjectFilters::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::projects::list_projects().await {
                Ok(list) => set_projects.set(list),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| filter_projects(&projects.get(), &filters.get()));

    let delete_project = move |id: String| {
        spawn_local(async move {
            match api::projects::delete_project(&id).await {
                Ok(()) => set_projects.update(|list| collection::remove(list, &id)),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    view! {
        <div class="project-list">
            <div class="page-header">
                <h2>"Projects"</h2>
                <button
                    class="primary-btn"
                    on:click=move |_| navigate.with_value(|nav| {
                        nav("/projects/new", Default::default())
                    })
                >
                    "+ New Project"
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <div class="filter-bar">
                <select
                    prop:value=move || filters.with(|f| {
                        f.status.map(|s| s.as_str()).unwrap_or("")
                    })
                    on:change=move |ev| {
                        let status = ProjectStatus::parse(&event_target_value(&ev));
                        set_filters.update(|f| f.status = status);
                    }
                >
                    <option value="">"All Status"</option>
                    {ProjectStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{status.label()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Search projects by title or description..."
                    prop:value=move || filters.with(|f| f.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        set_filters.update(|f| f.query = query);
                    }
                />
                <button
                    class="secondary-btn"
                    on:click=move |_| set_filters.update(|f| f.clear())
                >
                    "Clear Filters"
                </button>
            </div>

            {move || if loading.get() {
                view! { <p class="loading-text">"Loading projects..."</p> }.into_any()
            } else if visible.get().is_empty() {
                view! {
                    <div class="empty-card">
                        <p>"No projects yet"</p>
                        <button
                            class="primary-btn"
                            on:click=move |_| navigate.with_value(|nav| {
                                nav("/projects/new", Default::default())
                            })
                        >
                            "Create Your First Project"
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="project-grid">
                        <For
                            each=move || visible.get()
                            key=|project| project.id.clone()
                            children=move |project| {
                                let id = project.id.clone();
                                let detail_id = project.id.clone();
                                let member_count = project.members.len();
                                let deadline = project
                                    .deadline
                                    .as_ref()
                                    .map(|d| format!("Deadline: {}", fmt_date(d)));
                                view! {
                                    <div class="project-card">
                                        <div class="project-card-header">
                                            <h3>{project.title.clone()}</h3>
                                            <ProjectStatusBadge status=project.status/>
                                        </div>
                                        <p class="project-description">
                                            {project.description.clone()
                                                .unwrap_or_else(|| "No description".to_string())}
                                        </p>
                                        <p class="project-meta">
                                            {format!("Owner: {}", project.owner.name)}
                                        </p>
                                        <p class="project-meta">
                                            {format!("Members: {}", member_count)}
                                        </p>
                                        {deadline.map(|text| view! {
                                            <p class="project-meta">{text}</p>
                                        })}
                                        <div class="project-card-actions">
                                            <button
                                                class="secondary-btn"
                                                on:click=move |_| navigate.with_value(|nav| {
                                                    nav(
                                                        &format!("/projects/{}", detail_id),
                                                        Default::default(),
                                                    )
                                                })
                                            >
                                                "View Details"
                                            </button>
                                            <DeleteConfirmButton
                                                label="Delete"
                                                warning="Delete this project?"
                                                on_confirm=move |_| delete_project(id.clone())
                                            />
                                        </div>
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
