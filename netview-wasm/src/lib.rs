use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Diagram {
    pub(crate) inner: netview::Diagram,
}

impl Diagram {
    pub fn rs_new(inner: netview::Diagram) -> Diagram {
        Diagram { inner }
    }
}

/// Route `log` records to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logging already set up: {}", e)));
        return;
    }
    log::info!("netview logging initialized");
}
