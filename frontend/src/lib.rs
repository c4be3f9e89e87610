use leptos::*;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod state;

#[cfg(test)]
mod test_support;

use pages::dashboard::DashboardPage;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Acme Learning Dashboard (wasm)");

    // Resolve the data base URL up front (non-blocking); panel loads that
    // start before it finishes join the same in-flight resolution.
    leptos::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <DashboardPage/> });
}
