//! Session store: single source of truth for "is someone signed in, and who".
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a reactive context from the app root. The backend's auth
//! event stream drives identity updates; navigation decisions derived from
//! those events pass through the redirect guard's global scope so that this
//! listener and a page's own mount check can never ping-pong the browser
//! between sign-in and the dashboard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{AuthEvent, Profile, Session};
use crate::util::auth::{DASHBOARD_PATH, SIGNIN_PATH, is_unauth_region};
use crate::util::redirect_guard::{AcquireOutcome, LatchStore, RedirectGuard};

/// Guard scope for navigations issued by the auth-event listener.
pub const GLOBAL_SCOPE: &str = "global";

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Opaque bearer token from the backend.
    pub access_token: String,
    /// Derived profile record.
    pub profile: Profile,
}

/// Authentication state tracking the current identity and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Present after a sign-in event or a successful startup session query.
    pub identity: Option<Identity>,
    /// True until the startup session query resolves, success or not.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

/// Derive an [`Identity`] from a backend session payload.
#[must_use]
pub fn identity_from_session(session: &Session) -> Identity {
    Identity {
        access_token: session.access_token.clone(),
        profile: session.profile.clone(),
    }
}

/// Apply an auth event to the state. Identity mirrors the most recent
/// event's session unconditionally; the UI never mutates it directly.
pub fn apply_auth_event(state: &mut SessionState, session: Option<&Session>) {
    state.identity = session.map(identity_from_session);
}

/// Navigation target implied by an auth event at the current location, if
/// any: sign-in while in the unauthenticated region lands on the dashboard,
/// sign-out while in the authenticated region lands on the sign-in page.
#[must_use]
pub fn navigation_for_event(event: AuthEvent, current_path: &str) -> Option<&'static str> {
    match event {
        AuthEvent::SignedIn if is_unauth_region(current_path) => Some(DASHBOARD_PATH),
        AuthEvent::SignedOut if !is_unauth_region(current_path) => Some(SIGNIN_PATH),
        _ => None,
    }
}

/// Navigation target for an auth event, gated by the global-scope latch.
/// Returns `Some` only when the guard grants the navigation (and the latch
/// is then left set for the destination mount to observe).
pub fn guarded_navigation<S: LatchStore>(
    guard: &RedirectGuard<S>,
    event: AuthEvent,
    current_path: &str,
    now_ms: u64,
) -> Option<&'static str> {
    let target = navigation_for_event(event, current_path)?;
    match guard.try_acquire(GLOBAL_SCOPE, now_ms) {
        AcquireOutcome::Proceed => Some(target),
        AcquireOutcome::Suppress => None,
    }
}

/// Query the backend for an existing session at startup.
///
/// `loading` transitions true to false exactly once, whatever the outcome:
/// a failed query is logged inside the fetch and lands here as "no
/// session", which is itself a valid resting state.
pub async fn initialize(session: RwSignal<SessionState>) {
    let fetched = crate::net::api::fetch_session().await;
    session.update(|state| {
        state.identity = fetched.as_ref().map(identity_from_session);
        state.loading = false;
    });
}

/// Auth-event listener installed by the app root.
///
/// Applies the event to identity, then issues at most one guarded hard
/// navigation. The navigation unloads this execution context; nothing is
/// scheduled after it.
pub fn handle_auth_event(session: RwSignal<SessionState>, event: AuthEvent, payload: Option<&Session>) {
    session.update(|state| apply_auth_event(state, payload));

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::redirect_guard::browser_guard();
        let path = crate::util::auth::current_path();
        let now = crate::util::redirect_guard::now_ms();
        if let Some(target) = guarded_navigation(&guard, event, &path, now) {
            log::info!("auth event {} at {path}: navigating to {target}", event.as_str());
            crate::util::auth::hard_navigate(target);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
    }
}

/// Remove the global-scope latch so deliberate in-app navigation never
/// trips the guard.
pub fn clear_latch() {
    #[cfg(feature = "hydrate")]
    {
        crate::util::redirect_guard::browser_guard().clear(GLOBAL_SCOPE);
    }
}
