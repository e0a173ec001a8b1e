//! Browser Bindings
//!
//! Host capabilities the store depends on, backed by `web_sys`.

mod dialog;
mod storage;

use wasm_bindgen::JsValue;

pub use dialog::*;
pub use storage::*;

/// Render a thrown JS value for logs and error messages
fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
