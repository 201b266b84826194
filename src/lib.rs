/// SRL Stream Viewer - Chrome Extension listing live SpeedRunsLive streams
/// Built with Rust + WASM + Yew

pub mod bridge;
pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod fetcher;
pub mod game_filter;
pub mod linkify;
pub mod renderer;
pub mod settings;
pub mod snapshot;
pub mod tab_slot;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use tab_slot::UniversalTab;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
