//! UI Components
//!
//! Pages and reusable Leptos components.

mod badges;
mod dashboard;
mod delete_confirm;
mod guard;
mod layout;
mod login;
mod project_detail;
mod project_form;
mod project_list;
mod register;
mod task_detail;
mod task_form;
mod task_list;

pub use dashboard::DashboardPage;
pub use guard::{HomeRedirect, RedirectIfAuthenticated, RequireAuth};
pub use layout::AppLayout;
pub use login::LoginPage;
pub use project_detail::ProjectDetailPage;
pub use project_form::ProjectFormPage;
pub use project_list::ProjectListPage;
pub use register::RegisterPage;
pub use task_detail::TaskDetailPage;
pub use task_form::TaskFormPage;
pub use task_list::TaskListPage;
