//! Taskboard Frontend Entry Point

mod api;
mod app;
mod collection;
mod components;
mod config;
mod error;
mod filters;
mod models;
mod session;
mod stats;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
