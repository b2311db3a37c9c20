//! Install-prompt session management.
//!
//! Tracks whether the browser's install affordance is available, whether
//! the application is already installed, and decides — via a persisted
//! visit counter and dismissal timestamp — when to surface the install
//! call-to-action.

use std::cell::{Cell, RefCell};

use thiserror::Error;

use crate::prefs::{PreferenceStore, PwaPreferences};

/// Delay after session start before evaluating the prompt decision, so
/// the call-to-action never interrupts initial page load.
pub const PROMPT_DELAY_MS: u32 = 30_000;

/// Cool-down after an explicit dismissal during which the prompt stays hidden.
pub const DISMISS_COOLDOWN_MS: u64 = 24 * 60 * 60 * 1000;

/// Visit count at which the call-to-action starts showing.
pub const MIN_VISITS_BEFORE_PROMPT: u32 = 2;

/// Errors from the platform install prompt.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("platform install prompt failed: {0}")]
    Platform(String),
}

/// The user's choice on a shown install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    Accepted,
    Dismissed,
}

/// Result of a [`InstallPromptManager::trigger_install`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No capability token was pending
    NotAvailable,
    /// The user accepted the install
    Accepted,
    /// The user dismissed the prompt
    Dismissed,
    /// The platform prompt rejected; logged, not propagated
    Failed,
}

/// Install affordance state, read by the UI instead of re-deriving it
/// from raw platform events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAvailability {
    /// No capability captured yet
    NotAvailable,
    /// A deferred prompt is ready to show
    Available,
    /// The application is installed; the affordance is gone for good
    Installed,
}

/// A deferred platform install action.
///
/// Tokens are single-use: showing the prompt consumes the capability.
#[allow(async_fn_in_trait)]
pub trait InstallCapability {
    /// Show the prompt and wait for the user's choice.
    async fn show(self) -> Result<UserChoice, InstallError>;
}

/// Decides when to surface the install call-to-action and tracks
/// installation and dismissal outcomes.
///
/// One instance per page session, shared by reference from the UI.
/// Methods take `&self`; state lives behind `Cell`/`RefCell` and no
/// borrow is held across an await, so platform event callbacks may
/// re-enter safely on the single browser thread.
pub struct InstallPromptManager<S, C> {
    store: RefCell<S>,
    pending: RefCell<Option<C>>,
    installed: Cell<bool>,
}

impl<S: PreferenceStore, C: InstallCapability> InstallPromptManager<S, C> {
    /// Create a manager.
    ///
    /// `installed_at_startup` is the platform's standalone-display check
    /// result, queried once when the page loads.
    pub fn new(store: S, installed_at_startup: bool) -> Self {
        Self {
            store: RefCell::new(store),
            pending: RefCell::new(None),
            installed: Cell::new(installed_at_startup),
        }
    }

    /// Retain a deferred install capability for later, user-triggered use.
    ///
    /// The caller must already have suppressed the platform's automatic
    /// prompt. Ignored once installed: the affordance is discarded.
    pub fn capture(&self, capability: C) {
        if self.installed.get() {
            return;
        }
        *self.pending.borrow_mut() = Some(capability);
    }

    /// Handle the platform's install-completed signal.
    pub fn on_installed(&self, now_ms: u64) {
        self.installed.set(true);
        self.pending.borrow_mut().take();
        self.record_installed(now_ms);
    }

    /// Show the pending prompt and await the user's choice.
    ///
    /// The capability is taken out before the await, so a concurrent
    /// second call observes no pending prompt and returns
    /// [`InstallOutcome::NotAvailable`].
    pub async fn trigger_install(&self) -> InstallOutcome {
        let Some(capability) = self.pending.borrow_mut().take() else {
            return InstallOutcome::NotAvailable;
        };
        match capability.show().await {
            Ok(UserChoice::Accepted) => {
                self.installed.set(true);
                InstallOutcome::Accepted
            }
            Ok(UserChoice::Dismissed) => InstallOutcome::Dismissed,
            Err(err) => {
                log::warn!("install prompt failed: {err}");
                InstallOutcome::Failed
            }
        }
    }

    /// Record a qualifying session start and decide whether to show the
    /// install call-to-action.
    ///
    /// Advances the persisted visit counter as part of the evaluation;
    /// call exactly once per session start. Never prompts on the very
    /// first visit, within [`DISMISS_COOLDOWN_MS`] of a dismissal, or
    /// once installed. A call suppressed by the dismissal gate does not
    /// advance the counter.
    pub fn record_visit_and_decide(&self, now_ms: u64) -> bool {
        let mut store = self.store.borrow_mut();
        let mut prefs = PwaPreferences::read_from(&*store);

        if let Some(dismissed) = prefs.last_dismissed
            && now_ms.saturating_sub(dismissed) < DISMISS_COOLDOWN_MS
        {
            return false;
        }
        if self.installed.get() || prefs.is_installed() {
            return false;
        }

        let count = prefs.visit_count.unwrap_or(0);
        if count == 0 {
            prefs.visit_count = Some(1);
            prefs.first_visit = Some(now_ms);
            prefs.write_to(&mut *store);
            return false;
        }

        let count = count + 1;
        prefs.visit_count = Some(count);
        prefs.write_to(&mut *store);
        count >= MIN_VISITS_BEFORE_PROMPT
    }

    /// Persist an explicit user dismissal of the call-to-action.
    pub fn record_dismissal(&self, now_ms: u64) {
        let mut store = self.store.borrow_mut();
        let mut prefs = PwaPreferences::read_from(&*store);
        prefs.last_dismissed = Some(now_ms);
        prefs.write_to(&mut *store);
    }

    /// Whether an install-completed signal (or accepted prompt) has been seen.
    pub fn is_installed(&self) -> bool {
        self.installed.get()
    }

    /// Current affordance state.
    pub fn availability(&self) -> InstallAvailability {
        if self.installed.get() {
            InstallAvailability::Installed
        } else if self.pending.borrow().is_some() {
            InstallAvailability::Available
        } else {
            InstallAvailability::NotAvailable
        }
    }

    /// Snapshot of the persisted record.
    pub fn preferences(&self) -> PwaPreferences {
        PwaPreferences::read_from(&*self.store.borrow())
    }

    fn record_installed(&self, now_ms: u64) {
        let mut store = self.store.borrow_mut();
        let mut prefs = PwaPreferences::read_from(&*store);
        // First install wins; the flag is never cleared
        if !prefs.is_installed() {
            prefs.installed = Some(true);
            prefs.installed_at = Some(now_ms);
            prefs.write_to(&mut *store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    const HOUR_MS: u64 = 60 * 60 * 1000;

    #[derive(Default)]
    struct MemoryStore {
        data: Option<String>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.data.clone()
        }

        fn save(&mut self, data: &str) {
            self.data = Some(data.to_string());
        }
    }

    struct FakePrompt {
        choice: UserChoice,
        fails: bool,
        shows: Rc<Cell<u32>>,
    }

    impl FakePrompt {
        fn accepting(shows: &Rc<Cell<u32>>) -> Self {
            Self {
                choice: UserChoice::Accepted,
                fails: false,
                shows: shows.clone(),
            }
        }

        fn dismissing(shows: &Rc<Cell<u32>>) -> Self {
            Self {
                choice: UserChoice::Dismissed,
                fails: false,
                shows: shows.clone(),
            }
        }

        fn failing(shows: &Rc<Cell<u32>>) -> Self {
            Self {
                choice: UserChoice::Dismissed,
                fails: true,
                shows: shows.clone(),
            }
        }
    }

    impl InstallCapability for FakePrompt {
        async fn show(self) -> Result<UserChoice, InstallError> {
            self.shows.set(self.shows.get() + 1);
            if self.fails {
                Err(InstallError::Platform("prompt rejected".to_string()))
            } else {
                Ok(self.choice)
            }
        }
    }

    fn manager() -> InstallPromptManager<MemoryStore, FakePrompt> {
        InstallPromptManager::new(MemoryStore::default(), false)
    }

    #[test]
    fn test_first_visit_never_prompts() {
        let m = manager();

        assert!(!m.record_visit_and_decide(1_000));

        let prefs = m.preferences();
        assert_eq!(prefs.visit_count, Some(1));
        assert_eq!(prefs.first_visit, Some(1_000));
    }

    #[test]
    fn test_second_visit_prompts() {
        let m = manager();

        assert!(!m.record_visit_and_decide(1_000));
        assert!(m.record_visit_and_decide(2_000));

        let prefs = m.preferences();
        assert_eq!(prefs.visit_count, Some(2));
        // firstVisit keeps the original timestamp
        assert_eq!(prefs.first_visit, Some(1_000));
    }

    #[test]
    fn test_recent_dismissal_gates_prompt() {
        let m = manager();
        m.record_visit_and_decide(0);
        m.record_visit_and_decide(1);
        m.record_dismissal(10_000);

        assert!(!m.record_visit_and_decide(10_000 + HOUR_MS));

        // A gated call must not advance the counter
        assert_eq!(m.preferences().visit_count, Some(2));
    }

    #[test]
    fn test_stale_dismissal_does_not_gate() {
        let m = manager();
        m.record_visit_and_decide(0);
        m.record_visit_and_decide(1);
        m.record_dismissal(10_000);

        assert!(m.record_visit_and_decide(10_000 + 25 * HOUR_MS));
        assert_eq!(m.preferences().visit_count, Some(3));
    }

    #[test]
    fn test_installed_suppresses_prompt_forever() {
        let m = manager();
        m.record_visit_and_decide(0);
        m.record_visit_and_decide(1);
        m.on_installed(5_000);

        assert!(!m.record_visit_and_decide(6_000));
        assert!(!m.record_visit_and_decide(7_000 + 48 * HOUR_MS));

        let prefs = m.preferences();
        assert_eq!(prefs.installed, Some(true));
        assert_eq!(prefs.installed_at, Some(5_000));
    }

    #[test]
    fn test_installed_at_is_set_once() {
        let m = manager();

        m.on_installed(5_000);
        m.on_installed(9_000);

        assert_eq!(m.preferences().installed_at, Some(5_000));
    }

    #[tokio::test]
    async fn test_trigger_without_capability_is_noop() {
        let m = manager();

        let outcome = m.trigger_install().await;

        assert_eq!(outcome, InstallOutcome::NotAvailable);
        assert!(!m.is_installed());
    }

    #[tokio::test]
    async fn test_trigger_accepted_installs_and_consumes_token() {
        let shows = Rc::new(Cell::new(0));
        let m = manager();
        m.capture(FakePrompt::accepting(&shows));
        assert_eq!(m.availability(), InstallAvailability::Available);

        let outcome = m.trigger_install().await;

        assert_eq!(outcome, InstallOutcome::Accepted);
        assert!(m.is_installed());
        assert_eq!(m.availability(), InstallAvailability::Installed);
        assert_eq!(shows.get(), 1);

        // The token was single-use
        assert_eq!(m.trigger_install().await, InstallOutcome::NotAvailable);
        assert_eq!(shows.get(), 1);
    }

    #[tokio::test]
    async fn test_trigger_dismissed_clears_token_without_install() {
        let shows = Rc::new(Cell::new(0));
        let m = manager();
        m.capture(FakePrompt::dismissing(&shows));

        let outcome = m.trigger_install().await;

        assert_eq!(outcome, InstallOutcome::Dismissed);
        assert!(!m.is_installed());
        assert_eq!(m.availability(), InstallAvailability::NotAvailable);
    }

    #[tokio::test]
    async fn test_trigger_platform_failure_is_swallowed() {
        let shows = Rc::new(Cell::new(0));
        let m = manager();
        m.capture(FakePrompt::failing(&shows));

        let outcome = m.trigger_install().await;

        assert_eq!(outcome, InstallOutcome::Failed);
        assert!(!m.is_installed());
    }

    #[test]
    fn test_capture_ignored_once_installed() {
        let shows = Rc::new(Cell::new(0));
        let m = manager();
        m.on_installed(1_000);

        m.capture(FakePrompt::accepting(&shows));

        assert_eq!(m.availability(), InstallAvailability::Installed);
    }

    #[test]
    fn test_startup_standalone_counts_as_installed() {
        let m: InstallPromptManager<MemoryStore, FakePrompt> =
            InstallPromptManager::new(MemoryStore::default(), true);

        assert!(m.is_installed());
        assert!(!m.record_visit_and_decide(1_000));
    }

    #[test]
    fn test_corrupt_record_treated_as_fresh() {
        let store = MemoryStore {
            data: Some("][ definitely not json".to_string()),
        };
        let m: InstallPromptManager<MemoryStore, FakePrompt> =
            InstallPromptManager::new(store, false);

        assert!(!m.record_visit_and_decide(1_000));
        assert_eq!(m.preferences().visit_count, Some(1));
    }
}
