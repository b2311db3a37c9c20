//! Install call-to-action banner.
//!
//! Owns the install-prompt manager for the page session: captures the
//! deferred platform prompt, waits out the session-start delay, and
//! shows the banner only when the visit counter and dismissal cool-down
//! allow it.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use pwa::{InstallOutcome, InstallPromptManager, PROMPT_DELAY_MS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::platform::install::{
    BeforeInstallPromptEvent, DeferredInstallPrompt, is_standalone_display,
};
use crate::platform::now_ms;
use crate::platform::storage::LocalStoragePrefs;

type Manager = InstallPromptManager<LocalStoragePrefs, DeferredInstallPrompt>;

/// Install call-to-action banner component.
#[function_component(InstallBanner)]
pub fn install_banner() -> Html {
    let manager = use_memo((), |_| {
        Manager::new(LocalStoragePrefs, is_standalone_display())
    });
    let visible = use_state(|| false);

    {
        let manager = manager.clone();
        let visible = visible.clone();

        use_effect_with((), move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            {
                let manager = manager.clone();
                EventListener::new(&window, "beforeinstallprompt", move |event| {
                    // Suppress the automatic prompt; the banner triggers it
                    event.prevent_default();
                    let event: BeforeInstallPromptEvent = event.clone().unchecked_into();
                    manager.capture(DeferredInstallPrompt::new(event));
                })
                .forget();
            }

            {
                let manager = manager.clone();
                let visible = visible.clone();
                EventListener::new(&window, "appinstalled", move |_| {
                    manager.on_installed(now_ms());
                    visible.set(false);
                })
                .forget();
            }

            Timeout::new(PROMPT_DELAY_MS, move || {
                if manager.record_visit_and_decide(now_ms()) {
                    visible.set(true);
                }
            })
            .forget();
        });
    }

    let on_install = {
        let manager = manager.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            let manager = manager.clone();
            let visible = visible.clone();
            spawn_local(async move {
                let outcome = manager.trigger_install().await;
                if outcome == InstallOutcome::Dismissed {
                    manager.record_dismissal(now_ms());
                }
                // The capability is consumed either way
                visible.set(false);
            });
        })
    };

    let on_dismiss = {
        let manager = manager.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            manager.record_dismissal(now_ms());
            visible.set(false);
        })
    };

    if !*visible {
        return Html::default();
    }

    html! {
        <div class="card install-banner">
            <div class="install-copy">
                <strong>{"Take matlog to the mats"}</strong>
                <p class="text-secondary">
                    {"Install the app for full-screen logging and offline access."}
                </p>
            </div>
            <div class="install-actions">
                <button class="btn btn-primary" onclick={on_install}>{"Install"}</button>
                <button class="btn btn-secondary" onclick={on_dismiss}>{"Not now"}</button>
            </div>
        </div>
    }
}
