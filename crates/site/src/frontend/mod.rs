//! Leptos frontend (wasm32 only).

pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

use wasm_bindgen::prelude::*;

/// WASM entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    gajanand_observability::init();
    leptos::mount_to_body(app::App);
}
