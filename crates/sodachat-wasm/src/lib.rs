use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod app;
mod browser_storage;
mod components;
mod config;
mod dom;
mod utils;

pub use browser_storage::BrowserStorage;

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Soda Machine AI Chat WASM initialized");
}

/// Load saved conversations, render the page and wire up its controls
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    log::info!("Starting chat app");
    app::ChatApp::new()?.start()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
