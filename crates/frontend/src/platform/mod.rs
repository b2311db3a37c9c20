//! Browser platform adapters behind the `pwa` trait seams.

pub mod install;
pub mod storage;
pub mod wake_lock;

use wasm_bindgen::JsValue;

/// Current time as epoch milliseconds.
pub fn now_ms() -> u64 {
    let now = js_sys::Date::now();
    if !now.is_finite() || now.is_sign_negative() {
        return 0;
    }
    now.floor().min(u64::MAX as f64) as u64
}

/// Render a rejected JS value for log output.
pub(crate) fn format_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
