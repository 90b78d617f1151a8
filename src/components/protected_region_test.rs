use super::*;
use crate::net::types::{AuthEvent, Profile};
use crate::state::session::guarded_navigation;
use crate::util::redirect_guard::MemoryLatchStore;

fn live_session() -> Session {
    Session {
        access_token: "tok-live".to_owned(),
        profile: Profile {
            name: "J. Ng".to_owned(),
            occupation: None,
            contact: None,
        },
    }
}

#[test]
fn live_session_renders_without_navigation() {
    let store = MemoryLatchStore::default();
    let guard = RedirectGuard::new(store.clone());

    let outcome = resolve_session_outcome(&guard, "dashboard", 20_000, Some(&live_session()));

    assert_eq!(outcome, GateOutcome::Render);
    assert_eq!(store.read("dashboard_redirect_attempted"), None);
}

// Sign-in navigates to the dashboard and leaves the global latch set; the
// authenticated mount must release it, or a sign-out inside the cooldown
// window is suppressed and the user is parked on a page their identity no
// longer permits.
#[test]
fn authenticated_mount_releases_global_latch() {
    let store = MemoryLatchStore::default();
    let guard = RedirectGuard::new(store.clone());

    assert_eq!(
        guarded_navigation(&guard, AuthEvent::SignedIn, "/auth/signin", 10_000),
        Some("/dashboard")
    );
    assert_eq!(store.read("global_redirect_attempted"), Some("10000".to_owned()));

    let outcome = resolve_session_outcome(&guard, "dashboard", 10_500, Some(&live_session()));
    assert_eq!(outcome, GateOutcome::Render);
    assert_eq!(store.read("global_redirect_attempted"), None);

    // An immediate sign-out now navigates instead of being suppressed.
    assert_eq!(
        guarded_navigation(&guard, AuthEvent::SignedOut, "/dashboard", 10_600),
        Some("/auth/signin")
    );
}

#[test]
fn live_session_clears_leftover_latch() {
    let store = MemoryLatchStore::default();
    store.write("dashboard_redirect_attempted", "1000");
    let guard = RedirectGuard::new(store.clone());

    resolve_session_outcome(&guard, "dashboard", 20_000, Some(&live_session()));

    assert_eq!(store.read("dashboard_redirect_attempted"), None);
}

#[test]
fn missing_session_redirects_and_sets_latch() {
    let store = MemoryLatchStore::default();
    let guard = RedirectGuard::new(store.clone());

    let outcome = resolve_session_outcome(&guard, "dashboard", 20_000, None);

    assert_eq!(outcome, GateOutcome::Redirect("/auth/signin"));
    assert_eq!(store.read("dashboard_redirect_attempted"), Some("20000".to_owned()));
}

#[test]
fn suppressed_acquire_renders_to_break_loop() {
    let store = MemoryLatchStore::default();
    store.write("dashboard_redirect_attempted", "19900");
    let guard = RedirectGuard::new(store.clone());

    let outcome = resolve_session_outcome(&guard, "dashboard", 20_000, None);

    assert_eq!(outcome, GateOutcome::Render);
    assert_eq!(store.read("dashboard_redirect_attempted"), None);
}

#[test]
fn recent_latch_short_circuits_and_clears() {
    let store = MemoryLatchStore::default();
    store.write("dashboard_redirect_attempted", "19900");
    let guard = RedirectGuard::new(store.clone());

    assert!(short_circuits(&guard, "dashboard", 20_000));
    assert_eq!(store.read("dashboard_redirect_attempted"), None);
}

#[test]
fn stale_latch_does_not_short_circuit() {
    let store = MemoryLatchStore::default();
    store.write("dashboard_redirect_attempted", "1000");
    let guard = RedirectGuard::new(store.clone());

    assert!(!short_circuits(&guard, "dashboard", 20_000));
    // A stale latch is left for `try_acquire` to restamp.
    assert_eq!(store.read("dashboard_redirect_attempted"), Some("1000".to_owned()));
}

#[test]
fn fresh_mount_does_not_short_circuit() {
    let guard = RedirectGuard::new(MemoryLatchStore::default());
    assert!(!short_circuits(&guard, "dashboard", 20_000));
}

// Two-observer sequence: the global listener navigates on sign-out, the
// sign-in page would bounce back on a racing sign-in check, and the next
// protected mount must break the cycle instead of re-redirecting.
#[test]
fn navigation_count_is_bounded_across_observers() {
    let store = MemoryLatchStore::default();
    let guard = RedirectGuard::new(store.clone());

    // Global listener: sign-out while on the dashboard navigates once.
    assert!(guarded_navigation(&guard, AuthEvent::SignedOut, "/dashboard", 30_000).is_some());

    // Same window, opposite event: suppressed, no second navigation.
    assert!(guarded_navigation(&guard, AuthEvent::SignedIn, "/auth/signin", 30_100).is_none());

    // A protected mount with no session redirects once under its own scope.
    assert_eq!(
        resolve_session_outcome(&guard, "dashboard", 30_200, None),
        GateOutcome::Redirect("/auth/signin")
    );

    // The next mount of that region sees the recent marker and renders; the
    // cycle terminates.
    assert!(short_circuits(&guard, "dashboard", 30_300));
}
