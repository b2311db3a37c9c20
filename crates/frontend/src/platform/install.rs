//! Install-capability bindings.
//!
//! `beforeinstallprompt` is not part of any standard, so the event type
//! is bound by hand rather than through `web-sys`.

use js_sys::Reflect;
use pwa::{InstallCapability, InstallError, UserChoice};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::format_js_error;

#[wasm_bindgen]
unsafe extern "C" {
    /// Chromium's deferred-install event.
    #[wasm_bindgen(extends = web_sys::Event)]
    pub type BeforeInstallPromptEvent;

    #[wasm_bindgen(method)]
    fn prompt(this: &BeforeInstallPromptEvent) -> js_sys::Promise;

    #[wasm_bindgen(method, getter, js_name = userChoice)]
    fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}

/// Single-use install token wrapping a captured event.
pub struct DeferredInstallPrompt {
    event: BeforeInstallPromptEvent,
}

impl DeferredInstallPrompt {
    pub fn new(event: BeforeInstallPromptEvent) -> Self {
        Self { event }
    }
}

impl InstallCapability for DeferredInstallPrompt {
    async fn show(self) -> Result<UserChoice, InstallError> {
        JsFuture::from(self.event.prompt())
            .await
            .map_err(|err| InstallError::Platform(format_js_error(&err)))?;
        let choice = JsFuture::from(self.event.user_choice())
            .await
            .map_err(|err| InstallError::Platform(format_js_error(&err)))?;

        let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))
            .ok()
            .and_then(|value| value.as_string());
        match outcome.as_deref() {
            Some("accepted") => Ok(UserChoice::Accepted),
            _ => Ok(UserChoice::Dismissed),
        }
    }
}

/// Whether the app is currently displayed standalone, i.e. installed.
pub fn is_standalone_display() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if let Ok(Some(query)) = window.match_media("(display-mode: standalone)")
        && query.matches()
    {
        return true;
    }
    // iOS Safari reports installs through `navigator.standalone` instead
    Reflect::get(window.navigator().as_ref(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}
