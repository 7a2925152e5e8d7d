#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod effects;
pub mod header;
pub mod menu;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod reveal;
pub mod server_fns;
pub mod timing;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod services;
#[cfg(feature = "ssr")]
pub mod state;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
