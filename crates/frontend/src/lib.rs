//! matlog - Yew WASM Frontend
//!
//! This crate provides the installable web UI for the matlog training
//! journal: dashboard, session log, round timer, and the browser-side
//! adapters behind the install-prompt and wake-lock managers.

mod app;
mod components;
mod data;
mod nav;
mod pages;
mod platform;
mod title;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
