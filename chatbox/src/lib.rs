//! # chatbox
//!
//! Leptos + WASM in-game chat box: a scrolling message log, a text input
//! that understands a handful of slash commands, and an autocomplete dropdown
//! for those commands.
//!
//! Command handling (`command`) and widget state (`state`) are plain Rust and
//! independent of the browser; `components` wires them to DOM events.

pub mod app;
pub mod command;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
