//! # client
//!
//! Leptos frontend for the newsroom: the listing page with category filter and
//! search, and the article page with SEO metadata and share links.
//!
//! Rendered on the server by `server` (feature `ssr`) and hydrated in the
//! browser (feature `hydrate`). Records and listing logic live in the `news`
//! crate; this crate only binds them to views.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
