//! Persisted installability preferences.
//!
//! One JSON record under a fixed key in a caller-supplied key-value
//! store. Reads tolerate a missing key or malformed content by
//! substituting the empty record.

use serde::{Deserialize, Serialize};

/// Storage key for the preference record.
pub const PREFS_STORAGE_KEY: &str = "matlog.pwa";

/// Raw-string key-value storage backing the preference record.
///
/// The store holds raw strings; JSON encoding stays on this side of the
/// seam, so implementations (localStorage, in-memory fakes) carry no
/// encoding dependency.
pub trait PreferenceStore {
    /// Read the stored record, if any.
    fn load(&self) -> Option<String>;

    /// Write the serialized record.
    fn save(&mut self, data: &str);
}

/// Persisted install-prompt preferences.
///
/// All fields are optional on the wire; absent fields are omitted
/// rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaPreferences {
    /// Qualifying session starts seen so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<u32>,
    /// Epoch milliseconds of the first recorded visit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_visit: Option<u64>,
    /// Epoch milliseconds of the last explicit dismissal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_dismissed: Option<u64>,
    /// Set once installation completes; never cleared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed: Option<bool>,
    /// Epoch milliseconds of installation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<u64>,
}

impl PwaPreferences {
    /// Read the record from the store.
    ///
    /// A missing key or unparsable content yields the empty record;
    /// corruption never propagates to the caller.
    pub fn read_from<S: PreferenceStore>(store: &S) -> Self {
        store
            .load()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Write the record back to the store.
    pub fn write_to<S: PreferenceStore>(&self, store: &mut S) {
        match serde_json::to_string(self) {
            Ok(raw) => store.save(&raw),
            Err(err) => log::warn!("failed to serialize pwa preferences: {err}"),
        }
    }

    /// Whether installation has been recorded.
    pub fn is_installed(&self) -> bool {
        self.installed.unwrap_or(false)
    }
}
