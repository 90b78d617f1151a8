//! Shared auth navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and the protected-region gate must agree on which
//! routes count as the unauthenticated region and must issue navigations
//! the same way, so both concerns live here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Sign-in entry point for the unauthenticated region.
pub const SIGNIN_PATH: &str = "/auth/signin";

/// Authenticated landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Whether `path` lies in the unauthenticated region (the `/auth` subtree).
#[must_use]
pub fn is_unauth_region(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}

/// Current location pathname, or `/` outside a browser.
#[must_use]
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

/// Issue a full-page navigation to `target`.
///
/// This is a hard reload, not a client-side route transition: after an auth
/// transition the browser history and cookie state must be rebuilt from
/// scratch. The navigation unloads the current execution context, so callers
/// must not rely on any code after this call running.
pub fn hard_navigate(target: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
