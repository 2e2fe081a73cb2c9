//! Todo UI Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    mount_to_body(App);
}
