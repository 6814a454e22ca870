//! App Layout
//!
//! Navigation chrome shared by every protected page.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::use_session;

#[component]
fn NavLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    let navigate = StoredValue::new(use_navigate());
    let location = use_location();
    let prefix = href.clone();
    let link_class = move || {
        if location.pathname.get().starts_with(&prefix) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    view! {
        <button
            class=link_class
            on:click=move |_| navigate.with_value(|nav| nav(&href, Default::default()))
        >
            {label}
        </button>
    }
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    let on_logout = move |_| {
        session.logout();
        navigate.with_value(|nav| nav("/login", Default::default()));
    };

    view! {
        <div class="app-shell">
            <nav class="top-nav">
                <div class="nav-left">
                    <h1 class="app-title">"Task Management"</h1>
                    <div class="nav-links">
                        <NavLink href="/dashboard" label="Dashboard"/>
                        <NavLink href="/projects" label="Projects"/>
                        <NavLink href="/tasks" label="Tasks"/>
                    </div>
                </div>
                <div class="nav-right">
                    <span class="nav-welcome">
                        {move || session.user().map(|u| format!("Welcome, {}!", u.name))}
                    </span>
                    <button class="logout-btn" on:click=on_logout>"Logout"</button>
                </div>
            </nav>
            <main class="page-content">{children()}</main>
        </div>
    }
}
