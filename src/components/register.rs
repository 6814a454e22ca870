//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let error = session.error();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let email = email.get();
        let password = password.get();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            if session.register(name, email, password).await.is_ok() {
                navigate.with_value(|nav| nav("/dashboard", Default::default()));
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2 class="auth-title">"Create your account"</h2>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label">"Name"</label>
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Email"</label>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
