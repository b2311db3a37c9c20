//! localStorage-backed preference store.

use pwa::{PREFS_STORAGE_KEY, PreferenceStore};

/// Preference store over `window.localStorage`.
///
/// Unavailable storage reads as the empty record; failed writes (quota,
/// disabled storage) are logged and dropped, never surfaced.
pub struct LocalStoragePrefs;

impl PreferenceStore for LocalStoragePrefs {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(PREFS_STORAGE_KEY).ok()?
    }

    fn save(&mut self, data: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            log::warn!("local storage is unavailable; preferences not persisted");
            return;
        };
        if storage.set_item(PREFS_STORAGE_KEY, data).is_err() {
            log::warn!("failed to persist preferences");
        }
    }
}
