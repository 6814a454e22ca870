//! Project Form Page

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::api::projects::ProjectPayload;
use crate::models::ProjectStatus;
use crate::session::use_session;

#[component]
pub fn ProjectFormPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(ProjectStatus::Active);
    let (deadline, set_deadline) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.is_empty() {
            return;
        }
        let description = description.get();
        let status = status.get();
        // The date input yields YYYY-MM-DD; anything else leaves it unset.
        let deadline = NaiveDate::parse_from_str(&deadline.get(), "%Y-%m-%d").ok();

        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            let payload = ProjectPayload {
                title: &title,
                description: (!description.is_empty()).then_some(description.as_str()),
                status,
                deadline,
            };
            match api::projects::create_project(&payload).await {
                Ok(_) => navigate.with_value(|nav| nav("/projects", Default::default())),
                Err(err) => {
                    if !session.expire_if_unauthorized(&err) {
                        set_error.set(Some(err.to_string()));
                    }
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="form-page">
            <div class="page-header">
                <button
                    class="back-btn"
                    on:click=move |_| navigate.with_value(|nav| {
                        nav("/projects", Default::default())
                    })
                >
                    "← Back"
                </button>
                <h2>"Create New Project"</h2>
            </div>

            <div class="form-card">
                <form on:submit=on_submit>
                    {move || error.get().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <label class="form-label">"Project Title *"</label>
                    <input
                        type="text"
                        required
                        placeholder="Enter project title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Description"</label>
                    <textarea
                        rows="4"
                        placeholder="Enter project description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <label class="form-label">"Status"</label>
                    <select
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| {
                            if let Some(parsed) = ProjectStatus::parse(&event_target_value(&ev)) {
                                set_status.set(parsed);
                            }
                        }
                    >
                        {ProjectStatus::ALL.iter().map(|s| view! {
                            <option value=s.as_str()>{s.label()}</option>
                        }).collect_view()}
                    </select>

                    <label class="form-label">"Deadline"</label>
                    <input
                        type="date"
                        prop:value=move || deadline.get()
                        on:input=move |ev| set_deadline.set(event_target_value(&ev))
                    />

                    <div class="form-actions">
                        <button type="submit" class="primary-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "Creating..." } else { "Create Project" }}
                        </button>
                        <button
                            type="button"
                            class="secondary-btn"
                            on:click=move |_| navigate.with_value(|nav| {
                                nav("/projects", Default::default())
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
