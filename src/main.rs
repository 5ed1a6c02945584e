//! Field Order Frontend Entry Point

mod models;
mod config;
mod commands;
mod selection;
mod filter;
mod reorder;
mod groups;
mod store;
mod context;
mod browser;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
