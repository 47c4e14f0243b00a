//! # blog-client
//!
//! Leptos + WASM presentation layer for the blog. Mounts the navigation bar
//! and new-post dialog into server-rendered pages, keeps the bearer token in
//! `localStorage`, and caches the signed-in user for the life of the page.
//!
//! Browser globals sit behind the traits in `util` and `net::http`, so
//! everything except the `csr` entry point runs in native tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: logging, panic hook, then the islands.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ClientConfig::from_document();
    app::mount_islands(app::Services::browser(config));
}
