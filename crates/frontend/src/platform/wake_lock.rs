//! Wake Lock API bindings.
//!
//! `navigator.wakeLock` is reached through `Reflect` and hand-rolled
//! bindings; web-sys gates the Wake Lock interfaces behind its unstable
//! cfg.

use gloo_events::EventListener;
use js_sys::Reflect;
use pwa::{WakeLockError, WakeLockHandle, WakeLockPlatform};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::format_js_error;

#[wasm_bindgen]
unsafe extern "C" {
    /// The `navigator.wakeLock` interface.
    type WakeLock;

    #[wasm_bindgen(method)]
    fn request(this: &WakeLock, kind: &str) -> js_sys::Promise;

    /// A held lock sentinel.
    #[wasm_bindgen(extends = web_sys::EventTarget)]
    type WakeLockSentinel;

    #[wasm_bindgen(method, getter)]
    fn released(this: &WakeLockSentinel) -> bool;

    #[wasm_bindgen(method)]
    fn release(this: &WakeLockSentinel) -> js_sys::Promise;
}

/// Browser wake-lock capability.
pub struct BrowserWakeLock;

impl BrowserWakeLock {
    fn interface() -> Option<WakeLock> {
        let navigator = web_sys::window()?.navigator();
        let value = Reflect::get(navigator.as_ref(), &JsValue::from_str("wakeLock")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(value.unchecked_into())
    }
}

impl WakeLockPlatform for BrowserWakeLock {
    type Handle = SentinelHandle;

    fn supported(&self) -> bool {
        Self::interface().is_some()
    }

    async fn request(&self) -> Result<SentinelHandle, WakeLockError> {
        let interface = Self::interface().ok_or(WakeLockError::Unsupported)?;
        let value = JsFuture::from(interface.request("screen"))
            .await
            .map_err(|err| WakeLockError::Platform(format_js_error(&err)))?;
        let sentinel: WakeLockSentinel = value.unchecked_into();

        // The platform may drop the lock on its own (tab hidden, screen
        // locked); the manager observes that through the sentinel's
        // released flag, this listener only logs it.
        let listener = EventListener::new(&sentinel, "release", |_| {
            log::info!("screen wake lock released by the platform");
        });
        listener.forget();

        Ok(SentinelHandle { sentinel })
    }
}

/// A held browser lock sentinel.
pub struct SentinelHandle {
    sentinel: WakeLockSentinel,
}

impl WakeLockHandle for SentinelHandle {
    fn released(&self) -> bool {
        self.sentinel.released()
    }

    async fn release(&self) -> Result<(), WakeLockError> {
        JsFuture::from(self.sentinel.release())
            .await
            .map(|_| ())
            .map_err(|err| WakeLockError::Platform(format_js_error(&err)))
    }
}
