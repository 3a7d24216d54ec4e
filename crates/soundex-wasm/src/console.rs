//! Browser console reporting.
//!
//! Calls into `web_sys::console` only link on wasm32; elsewhere the helpers
//! are no-ops so the bindings can be unit tested natively.

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}
