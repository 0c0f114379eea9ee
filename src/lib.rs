//! Pollen - studio landing page
//!
//! Server-rendered with Leptos and enhanced in the browser with scroll
//! animations, a WebGL particle background and a contact form.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
