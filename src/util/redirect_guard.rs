//! Redirect-loop guard backed by a scoped, timestamped latch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth transitions are applied with hard page navigations, so two
//! independent observers (the global auth-event listener and a protected
//! page's own mount check) can both decide "navigate to sign-in" at nearly
//! the same moment. The latch records that a navigation was recently issued
//! for a scope and survives the reload it guards by living in
//! `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! A caller that finds a latch younger than the cooldown both aborts its own
//! navigation and removes the latch, so a later caller is never blocked by a
//! leftover marker. Under rapid repeated events this can let a navigation
//! through that a stricter lock would have held back; loop termination is
//! the property being bought. Blocked or absent storage degrades to "always
//! proceed" with no loop protection rather than erroring.

#[cfg(test)]
#[path = "redirect_guard_test.rs"]
mod redirect_guard_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Age in milliseconds after which a latch is considered stale and ignorable.
///
/// A heuristic, not a measured figure; override per guard with
/// [`RedirectGuard::with_cooldown`] when a different window is needed.
pub const REDIRECT_COOLDOWN_MS: u64 = 3_000;

/// Storage collaborator for latch records.
///
/// Implementations must be synchronous and best-effort: a store that cannot
/// persist simply drops writes and reads back nothing.
pub trait LatchStore {
    /// Read the raw value for `key`, if present.
    fn read(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str);
    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// Result of a latch acquisition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// No recent latch existed; a fresh one was written and the caller may
    /// issue its navigation.
    Proceed,
    /// A latch inside the cooldown window was found and removed; the caller
    /// must abort its navigation.
    Suppress,
}

/// Per-scope one-shot latch over an injected [`LatchStore`].
///
/// All operations take the current time explicitly so the cooldown policy
/// is testable without a clock.
#[derive(Clone, Debug)]
pub struct RedirectGuard<S: LatchStore> {
    store: S,
    cooldown_ms: u64,
}

impl<S: LatchStore> RedirectGuard<S> {
    /// Guard with the default cooldown window.
    pub fn new(store: S) -> Self {
        Self::with_cooldown(store, REDIRECT_COOLDOWN_MS)
    }

    /// Guard with an explicit cooldown window in milliseconds.
    pub fn with_cooldown(store: S, cooldown_ms: u64) -> Self {
        Self { store, cooldown_ms }
    }

    /// Attempt to claim the right to navigate for `scope`.
    ///
    /// Absent, unparseable, or stale latches are replaced with a fresh one
    /// stamped `now_ms` and the caller proceeds. A latch younger than the
    /// cooldown is removed and the caller is suppressed, so a third caller
    /// after the removal proceeds regardless of elapsed time.
    pub fn try_acquire(&self, scope: &str, now_ms: u64) -> AcquireOutcome {
        let key = latch_key(scope);
        if let Some(age) = self.latch_age_ms(&key, now_ms) {
            if age < self.cooldown_ms {
                self.store.remove(&key);
                return AcquireOutcome::Suppress;
            }
        }
        self.store.write(&key, &now_ms.to_string());
        AcquireOutcome::Proceed
    }

    /// Read-only probe: was a navigation issued for `scope` within the
    /// cooldown window? Used by mount-time loop checks that must not claim
    /// the latch themselves.
    pub fn recently_attempted(&self, scope: &str, now_ms: u64) -> bool {
        self.latch_age_ms(&latch_key(scope), now_ms)
            .is_some_and(|age| age < self.cooldown_ms)
    }

    /// Remove the latch for `scope`, if any. Called once a destination page
    /// has mounted and determined no further navigation is needed.
    pub fn clear(&self, scope: &str) {
        self.store.remove(&latch_key(scope));
    }

    /// Age of the stored latch in milliseconds, or `None` if the latch is
    /// absent or its timestamp cannot be parsed. A timestamp in the future
    /// saturates to age zero.
    fn latch_age_ms(&self, key: &str, now_ms: u64) -> Option<u64> {
        let stamp = self.store.read(key)?.parse::<u64>().ok()?;
        Some(now_ms.saturating_sub(stamp))
    }
}

fn latch_key(scope: &str) -> String {
    format!("{scope}_redirect_attempted")
}

/// Shared in-memory store for tests and non-browser builds.
///
/// Clones share the same backing map, mirroring how every guard in a tab
/// sees the same `localStorage` partition.
#[derive(Clone, Debug, Default)]
pub struct MemoryLatchStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl LatchStore for MemoryLatchStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Latch store over `window.localStorage`. Every operation is best-effort:
/// a missing window or blocked storage reads back nothing and drops writes.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLatchStore;

#[cfg(feature = "hydrate")]
impl BrowserLatchStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl LatchStore for BrowserLatchStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Guard over the browser's `localStorage` with the default cooldown.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn browser_guard() -> RedirectGuard<BrowserLatchStore> {
    RedirectGuard::new(BrowserLatchStore)
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(feature = "hydrate")]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
