//! Installability and screen-wake-lock session management for matlog.
//!
//! Two small, independent helpers sit behind the installable-web-app
//! surface: [`install::InstallPromptManager`] decides when to surface the
//! install call-to-action, and [`wake_lock::WakeLockManager`] keeps the
//! screen awake during timed rounds. Both are platform-agnostic; the
//! frontend supplies `web-sys`-backed implementations of their traits.

pub mod install;
pub mod prefs;
pub mod wake_lock;

pub use install::{
    DISMISS_COOLDOWN_MS, InstallAvailability, InstallCapability, InstallError, InstallOutcome,
    InstallPromptManager, MIN_VISITS_BEFORE_PROMPT, PROMPT_DELAY_MS, UserChoice,
};
pub use prefs::{PREFS_STORAGE_KEY, PreferenceStore, PwaPreferences};
pub use wake_lock::{WakeLockError, WakeLockHandle, WakeLockManager, WakeLockPlatform};
