//! Application Root
//!
//! Provides the session context, kicks off the one-time credential check,
//! and wires the route table. Every protected route re-evaluates the access
//! gate on navigation.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    AppLayout, DashboardPage, HomeRedirect, LoginPage, ProjectDetailPage, ProjectFormPage,
    ProjectListPage, RedirectIfAuthenticated, RegisterPage, RequireAuth, TaskDetailPage,
    TaskFormPage, TaskListPage,
};
use crate::session::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    // One-time load → ready transition; re-runs are no-ops.
    Effect::new(move |_| session.initialize());

    view! {
        <Router>
            <Routes fallback=|| view! { <HomeRedirect/> }>
                <Route path=path!("/login") view=|| view! {
                    <RedirectIfAuthenticated>
                        <LoginPage/>
                    </RedirectIfAuthenticated>
                }/>
                <Route path=path!("/register") view=|| view! {
                    <RedirectIfAuthenticated>
                        <RegisterPage/>
                    </RedirectIfAuthenticated>
                }/>

                <Route path=path!("/dashboard") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <DashboardPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>

                <Route path=path!("/projects") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <ProjectListPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>
                <Route path=path!("/projects/new") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <ProjectFormPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>
                <Route path=path!("/projects/:id") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <ProjectDetailPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>

                <Route path=path!("/tasks") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <TaskListPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>
                <Route path=path!("/tasks/new") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <TaskFormPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>
                <Route path=path!("/tasks/:id") view=|| view! {
                    <RequireAuth>
                        <AppLayout>
                            <TaskDetailPage/>
                        </AppLayout>
                    </RequireAuth>
                }/>

                <Route path=path!("/") view=|| view! { <HomeRedirect/> }/>
            </Routes>
        </Router>
    }
}
