pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod search;
pub mod session;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
