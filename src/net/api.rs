//! REST helpers for the hosted backend's auth and records endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session checks fail closed: transport or parse failures are logged and
//! mapped to "no session" so callers redirect to sign-in rather than hang.
//! Sign-in failures come back as user-visible message strings.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;
#[cfg(feature = "hydrate")]
use super::{auth_events, types::AuthEvent};

#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/api/auth/session";
#[cfg(any(test, feature = "hydrate"))]
const SIGNIN_ENDPOINT: &str = "/api/auth/signin";
#[cfg(any(test, feature = "hydrate"))]
const SIGNOUT_ENDPOINT: &str = "/api/auth/signout";
#[cfg(any(test, feature = "hydrate"))]
const PATIENTS_ENDPOINT: &str = "/api/patients";

#[cfg(any(test, feature = "hydrate"))]
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

#[cfg(any(test, feature = "hydrate"))]
fn signin_failed_message(status: u16) -> String {
    format!("sign-in failed: {status}")
}

/// Fetch the live session from the backend.
///
/// Returns `None` if no session exists, on the server, or when the query
/// fails — "no session" is a valid resting state and failures degrade to it.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(SESSION_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session check failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        match resp.json::<Session>().await {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("session payload unreadable: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password credentials.
///
/// On success the `SIGNED_IN` event is emitted before returning, so the
/// session store's listener observes it ahead of any caller follow-up.
///
/// # Errors
///
/// Returns a user-visible message string when credentials are rejected or
/// the request fails. Failed attempts never touch the redirect guard.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(SIGNIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err(INVALID_CREDENTIALS_MESSAGE.to_owned());
        }
        if !resp.ok() {
            return Err(signin_failed_message(resp.status()));
        }
        let session: Session = resp.json().await.map_err(|e| e.to_string())?;
        auth_events::emit(AuthEvent::SignedIn, Some(&session));
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session and emit `SIGNED_OUT`.
///
/// The backend call is best-effort: the event fires even if the request
/// fails, since the local identity must still be torn down.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(SIGNOUT_ENDPOINT).send().await;
        auth_events::emit(AuthEvent::SignedOut, None);
    }
}

/// Fetch patient summaries for the landing page.
///
/// Payloads are opaque: the dashboard renders what it can find and passes
/// the rest through unmodified. Returns `None` if not authenticated, on the
/// server, or on failure.
pub async fn fetch_patient_summaries() -> Option<Vec<serde_json::Value>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PATIENTS_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<serde_json::Value>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
