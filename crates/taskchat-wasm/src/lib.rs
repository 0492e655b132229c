use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod chat_ui;
mod dom;
mod input;
mod transport;
mod utils;

pub use input::InputControl;
pub use transport::FetchTransport;

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("taskchat WASM initialized");
}

/// Wire up the chat page. Expects the element ids used by `index.html`.
#[wasm_bindgen]
pub fn init_chat() -> Result<(), JsValue> {
    log::info!("Initializing chat page");
    chat_ui::ChatApp::new()?.start()
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
