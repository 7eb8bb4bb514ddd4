pub mod admin;
pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod pages;
pub mod session;
pub mod storage;
pub mod toast;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
