//! Gate component deciding whether a protected region may render.
//!
//! ARCHITECTURE
//! ============
//! Per mount, the gate walks `Checking -> Authenticated | Unauthenticated`
//! exactly once. It queries the backend for a live session directly rather
//! than trusting the session store's cached identity, which may not have
//! initialized yet. The decision logic is pure ([`GateOutcome`]); the
//! component is a thin shell that applies the outcome.
//!
//! ERROR HANDLING
//! ==============
//! A failed session query is indistinguishable from "no session" by the
//! time it reaches the gate: the region fails closed to the sign-in page.

#[cfg(test)]
#[path = "protected_region_test.rs"]
mod protected_region_test;

use leptos::prelude::*;

use crate::net::types::Session;
use crate::state::session::GLOBAL_SCOPE;
use crate::util::auth::SIGNIN_PATH;
use crate::util::redirect_guard::{AcquireOutcome, LatchStore, RedirectGuard};

/// Render state for one mount of the gate. Terminal once it leaves
/// `Checking`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Session check in flight; children must not render yet.
    Checking,
    /// Live session confirmed; children render.
    Authenticated,
    /// No live session. `render_children` is true when a redirect was
    /// suppressed to break a loop, false when a navigation to sign-in was
    /// issued and a placeholder renders instead.
    Unauthenticated { render_children: bool },
}

/// Pure gate decision: render the region or redirect away from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the protected children.
    Render,
    /// Issue a hard navigation to the given target.
    Redirect(&'static str),
}

/// Mount-time loop probe. A latch inside the cooldown window means another
/// recent mount already navigated for this scope; the gate clears it and
/// short-circuits to rendering without consulting the backend, breaking the
/// redirect cycle.
pub fn short_circuits<S: LatchStore>(guard: &RedirectGuard<S>, scope: &str, now_ms: u64) -> bool {
    if guard.recently_attempted(scope, now_ms) {
        guard.clear(scope);
        return true;
    }
    false
}

/// Outcome for a resolved session query.
///
/// A live session renders and settles every navigation that could have
/// landed here: both this region's latch and the global latch are released,
/// so a sign-out arriving right after the sign-in navigation is not
/// suppressed by the marker that navigation left behind. An absent session
/// (including a failed query upstream) redirects to sign-in if the guard
/// grants the latch; losing the acquire race renders rather than risking a
/// second navigation in the same window.
pub fn resolve_session_outcome<S: LatchStore>(
    guard: &RedirectGuard<S>,
    scope: &str,
    now_ms: u64,
    session: Option<&Session>,
) -> GateOutcome {
    match session {
        Some(_) => {
            guard.clear(scope);
            guard.clear(GLOBAL_SCOPE);
            GateOutcome::Render
        }
        None => match guard.try_acquire(scope, now_ms) {
            AcquireOutcome::Proceed => GateOutcome::Redirect(SIGNIN_PATH),
            AcquireOutcome::Suppress => GateOutcome::Render,
        },
    }
}

/// Wrapper that renders `children` only behind a confirmed session.
///
/// `scope` names the guard latch for this region so concurrent mounts of
/// different regions cannot suppress each other.
#[component]
pub fn ProtectedRegion(scope: &'static str, children: ChildrenFn) -> impl IntoView {
    let gate = RwSignal::new(GateState::Checking);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let guard = crate::util::redirect_guard::browser_guard();
            if short_circuits(&guard, scope, crate::util::redirect_guard::now_ms()) {
                if alive_task.load(Ordering::Relaxed) {
                    log::warn!("redirect loop detected for scope {scope}; rendering without session");
                    gate.set(GateState::Unauthenticated { render_children: true });
                }
                return;
            }

            let session = crate::net::api::fetch_session().await;
            // A mount torn down before the query resolved must not write state.
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            let now = crate::util::redirect_guard::now_ms();
            match resolve_session_outcome(&guard, scope, now, session.as_ref()) {
                GateOutcome::Render => {
                    if session.is_some() {
                        gate.set(GateState::Authenticated);
                    } else {
                        gate.set(GateState::Unauthenticated { render_children: true });
                    }
                }
                GateOutcome::Redirect(target) => {
                    gate.set(GateState::Unauthenticated { render_children: false });
                    crate::util::auth::hard_navigate(target);
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scope;
    }

    view! {
        {move || match gate.get() {
            GateState::Checking => {
                view! {
                    <div class="protected-region protected-region--pending">
                        <p>"Checking session..."</p>
                    </div>
                }
                .into_any()
            }
            GateState::Authenticated | GateState::Unauthenticated { render_children: true } => {
                children().into_any()
            }
            GateState::Unauthenticated { render_children: false } => {
                view! {
                    <div class="protected-region protected-region--pending">
                        <p>"Redirecting to sign-in..."</p>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
