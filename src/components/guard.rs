//! Access Gate
//!
//! Pure function of session state, re-evaluated on every navigation:
//! initializing renders a neutral placeholder, unauthenticated redirects to
//! the login entry point, authenticated renders the guarded content.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::{use_session, SessionState};

#[component]
pub fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-text">{message}</div>
        </div>
    }
}

/// Wraps a protected route view. The attempted destination is discarded on
/// redirect; after login the user always lands on the dashboard.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        {move || match session.state().get() {
            SessionState::Initializing => {
                view! { <LoadingScreen message="Loading..."/> }.into_any()
            }
            SessionState::Unauthenticated => view! { <Redirect path="/login"/> }.into_any(),
            SessionState::Authenticated(_) => children().into_any(),
        }}
    }
}

/// Inverse gate for the login/register pages: an already-authenticated
/// session skips straight to the dashboard.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        {move || match session.state().get() {
            SessionState::Initializing => {
                view! { <LoadingScreen message="Loading..."/> }.into_any()
            }
            SessionState::Authenticated(_) => {
                view! { <Redirect path="/dashboard"/> }.into_any()
            }
            SessionState::Unauthenticated => children().into_any(),
        }}
    }
}

/// Root and unknown paths land wherever the session allows.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let session = use_session();
    view! {
        {move || match session.state().get() {
            SessionState::Initializing => {
                view! { <LoadingScreen message="Loading..."/> }.into_any()
            }
            SessionState::Authenticated(_) => {
                view! { <Redirect path="/dashboard"/> }.into_any()
            }
            SessionState::Unauthenticated => view! { <Redirect path="/login"/> }.into_any(),
        }}
    }
}
