//! Screen wake lock session management.
//!
//! Wraps acquisition and release of a platform screen-wake lock,
//! keeping at most one handle and staying idempotent in both
//! directions. Platform failures are logged and surfaced as boolean
//! results, never as errors.

use std::cell::RefCell;

use thiserror::Error;

/// Errors from the platform wake-lock capability.
#[derive(Error, Debug)]
pub enum WakeLockError {
    #[error("wake lock is not supported on this platform")]
    Unsupported,

    #[error("platform wake lock call failed: {0}")]
    Platform(String),
}

/// An acquired platform lock handle.
#[allow(async_fn_in_trait)]
pub trait WakeLockHandle {
    /// Whether the platform has already released this handle on its own
    /// (tab hidden, screen locked, etc.).
    fn released(&self) -> bool;

    /// Ask the platform to release the handle.
    async fn release(&self) -> Result<(), WakeLockError>;
}

/// Platform wake-lock capability.
#[allow(async_fn_in_trait)]
pub trait WakeLockPlatform {
    type Handle: WakeLockHandle;

    /// Whether the platform exposes the wake-lock capability at all.
    fn supported(&self) -> bool;

    /// Request a new screen lock handle.
    async fn request(&self) -> Result<Self::Handle, WakeLockError>;
}

/// Maintains at most one active screen-wake-lock handle, idempotently.
///
/// One instance per page session, shared by reference from the UI.
/// At-most-one-handle is enforced by checking current state
/// synchronously before issuing a platform request; concurrent calls
/// are not queued. No `RefCell` borrow is held across an await.
pub struct WakeLockManager<P: WakeLockPlatform> {
    platform: P,
    supported: bool,
    handle: RefCell<Option<P::Handle>>,
}

impl<P: WakeLockPlatform> WakeLockManager<P> {
    /// Create a manager; platform support is probed once here.
    pub fn new(platform: P) -> Self {
        let supported = platform.supported();
        Self {
            platform,
            supported,
            handle: RefCell::new(None),
        }
    }

    /// Whether the platform exposes the wake-lock capability.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Whether a lock is held and the platform has not released it.
    ///
    /// Reads the handle's own `released` flag rather than a cached
    /// boolean, so platform-initiated release is observed.
    pub fn is_active(&self) -> bool {
        self.handle.borrow().as_ref().is_some_and(|h| !h.released())
    }

    /// Acquire the screen lock.
    ///
    /// Returns `true` while a lock is held, including the no-op case
    /// where an unreleased handle already exists. Unsupported platforms
    /// and platform rejections log a warning and return `false`.
    pub async fn acquire(&self) -> bool {
        if !self.supported {
            log::warn!("screen wake lock is not supported on this platform");
            return false;
        }
        if self.is_active() {
            return true;
        }
        match self.platform.request().await {
            Ok(handle) => {
                *self.handle.borrow_mut() = Some(handle);
                true
            }
            Err(err) => {
                log::warn!("wake lock request failed: {err}");
                false
            }
        }
    }

    /// Release the screen lock.
    ///
    /// Already idle — including a handle the platform released on its
    /// own — is success with no platform call. On platform failure the
    /// handle is kept so a retry remains possible, and `false` is
    /// returned.
    pub async fn release(&self) -> bool {
        let taken = self.handle.borrow_mut().take();
        let Some(handle) = taken else {
            return true;
        };
        if handle.released() {
            return true;
        }
        match handle.release().await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("wake lock release failed: {err}");
                *self.handle.borrow_mut() = Some(handle);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        requests: Cell<u32>,
        releases: Cell<u32>,
    }

    struct FakeHandle {
        released: Rc<Cell<bool>>,
        fail_releases_remaining: Rc<Cell<u32>>,
        counters: Rc<Counters>,
    }

    impl WakeLockHandle for FakeHandle {
        fn released(&self) -> bool {
            self.released.get()
        }

        async fn release(&self) -> Result<(), WakeLockError> {
            self.counters.releases.set(self.counters.releases.get() + 1);
            let remaining = self.fail_releases_remaining.get();
            if remaining > 0 {
                self.fail_releases_remaining.set(remaining - 1);
                return Err(WakeLockError::Platform("release denied".to_string()));
            }
            self.released.set(true);
            Ok(())
        }
    }

    struct FakePlatform {
        supported: bool,
        fail_request: bool,
        fail_releases: u32,
        counters: Rc<Counters>,
        // `released` flag of the most recently issued handle, so tests
        // can simulate the platform dropping the lock on its own
        current: Rc<RefCell<Option<Rc<Cell<bool>>>>>,
    }

    impl FakePlatform {
        fn new() -> (Self, Rc<Counters>, Rc<RefCell<Option<Rc<Cell<bool>>>>>) {
            let counters = Rc::new(Counters::default());
            let current = Rc::new(RefCell::new(None));
            let platform = Self {
                supported: true,
                fail_request: false,
                fail_releases: 0,
                counters: counters.clone(),
                current: current.clone(),
            };
            (platform, counters, current)
        }
    }

    impl WakeLockPlatform for FakePlatform {
        type Handle = FakeHandle;

        fn supported(&self) -> bool {
            self.supported
        }

        async fn request(&self) -> Result<FakeHandle, WakeLockError> {
            self.counters.requests.set(self.counters.requests.get() + 1);
            if self.fail_request {
                return Err(WakeLockError::Platform("request denied".to_string()));
            }
            let released = Rc::new(Cell::new(false));
            *self.current.borrow_mut() = Some(released.clone());
            Ok(FakeHandle {
                released,
                fail_releases_remaining: Rc::new(Cell::new(self.fail_releases)),
                counters: self.counters.clone(),
            })
        }
    }

    #[tokio::test]
    async fn test_acquire_then_active() {
        let (platform, _, _) = FakePlatform::new();
        let manager = WakeLockManager::new(platform);

        assert!(!manager.is_active());
        assert!(manager.acquire().await);
        assert!(manager.is_active());
    }

    #[tokio::test]
    async fn test_acquire_is_idempotent() {
        let (platform, counters, _) = FakePlatform::new();
        let manager = WakeLockManager::new(platform);

        assert!(manager.acquire().await);
        assert!(manager.acquire().await);

        // Exactly one underlying platform request
        assert_eq!(counters.requests.get(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_acquire_fails_without_platform_call() {
        let (mut platform, counters, _) = FakePlatform::new();
        platform.supported = false;
        let manager = WakeLockManager::new(platform);

        assert!(!manager.is_supported());
        assert!(!manager.acquire().await);
        assert!(!manager.is_active());
        assert_eq!(counters.requests.get(), 0);
    }

    #[tokio::test]
    async fn test_request_rejection_stays_idle() {
        let (mut platform, _, _) = FakePlatform::new();
        platform.fail_request = true;
        let manager = WakeLockManager::new(platform);

        assert!(!manager.acquire().await);
        assert!(!manager.is_active());
    }

    #[tokio::test]
    async fn test_release_clears_handle() {
        let (platform, counters, _) = FakePlatform::new();
        let manager = WakeLockManager::new(platform);
        manager.acquire().await;

        assert!(manager.release().await);
        assert!(!manager.is_active());
        assert_eq!(counters.releases.get(), 1);
    }

    #[tokio::test]
    async fn test_release_when_idle_is_noop_success() {
        let (platform, counters, _) = FakePlatform::new();
        let manager = WakeLockManager::new(platform);

        assert!(manager.release().await);
        assert_eq!(counters.releases.get(), 0);
    }

    #[tokio::test]
    async fn test_release_failure_keeps_handle_for_retry() {
        let (mut platform, counters, _) = FakePlatform::new();
        platform.fail_releases = 1;
        let manager = WakeLockManager::new(platform);
        manager.acquire().await;

        assert!(!manager.release().await);
        assert!(manager.is_active());

        // The retry reaches the platform again and succeeds
        assert!(manager.release().await);
        assert!(!manager.is_active());
        assert_eq!(counters.releases.get(), 2);
    }

    #[tokio::test]
    async fn test_platform_initiated_release_is_observed() {
        let (platform, counters, current) = FakePlatform::new();
        let manager = WakeLockManager::new(platform);
        manager.acquire().await;
        assert!(manager.is_active());

        // Platform drops the lock on its own (e.g. tab hidden)
        current.borrow().as_ref().unwrap().set(true);

        assert!(!manager.is_active());

        // Releasing a platform-released handle is a no-op success
        assert!(manager.release().await);
        assert_eq!(counters.releases.get(), 0);

        // A fresh acquire issues a new platform request
        assert!(manager.acquire().await);
        assert!(manager.is_active());
        assert_eq!(counters.requests.get(), 2);
    }
}
