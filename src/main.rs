//! Todo List Frontend Entry Point

mod config;
mod logger;
mod storage;
mod theme;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    mount_to_body(App);
}
