//! In-process auth event stream.
//!
//! ARCHITECTURE
//! ============
//! The backend surfaces auth transitions as a callback stream. The client
//! runs on a single-threaded UI event loop, so the registry is a
//! thread-local list of `Rc` callbacks invoked synchronously in
//! registration order whenever `api` completes a sign-in or sign-out.
//!
//! TRADE-OFFS
//! ==========
//! `emit` snapshots the subscriber list before dispatch, so a callback that
//! subscribes or unsubscribes mid-emission affects the next emission, not
//! the one in flight. A callback may issue a hard navigation; anything after
//! it in the same emission only runs if the page has not yet unloaded.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::{AuthEvent, Session};

type Callback = Rc<dyn Fn(AuthEvent, Option<&Session>)>;

thread_local! {
    static SUBSCRIBERS: RefCell<Vec<(u64, Callback)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: RefCell<u64> = const { RefCell::new(0) };
}

/// Handle to a registered auth-event listener.
#[must_use = "dropping the handle without `forget` leaves the listener registered but unreachable"]
pub struct AuthSubscription {
    id: u64,
}

impl AuthSubscription {
    /// Remove the listener from the registry.
    pub fn unsubscribe(self) {
        SUBSCRIBERS.with(|subs| subs.borrow_mut().retain(|(id, _)| *id != self.id));
    }

    /// Keep the listener registered for the lifetime of the page. Used by
    /// the app root, which never tears its listener down.
    pub fn forget(self) {}
}

/// Register `callback` for every subsequent auth event.
pub fn subscribe<F>(callback: F) -> AuthSubscription
where
    F: Fn(AuthEvent, Option<&Session>) + 'static,
{
    let id = NEXT_ID.with(|next| {
        let mut next = next.borrow_mut();
        *next += 1;
        *next
    });
    SUBSCRIBERS.with(|subs| subs.borrow_mut().push((id, Rc::new(callback))));
    AuthSubscription { id }
}

/// Deliver `event` to all current subscribers in registration order.
pub fn emit(event: AuthEvent, session: Option<&Session>) {
    let snapshot: Vec<Callback> =
        SUBSCRIBERS.with(|subs| subs.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect());
    for callback in snapshot {
        callback(event, session);
    }
}
