//! Shared DTOs for the client/backend auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the hosted backend's session payloads so serde
//! round-trips stay lossless. Patient records deliberately have no DTO:
//! they are opaque `serde_json::Value` payloads passed through unmodified.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Derived profile record for the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Clinical role (e.g. `"Attending"`, `"Charge Nurse"`), if recorded.
    pub occupation: Option<String>,
    /// Contact detail (pager, extension, email), if recorded.
    pub contact: Option<String>,
}

/// An authenticated session as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token; never inspected client-side.
    pub access_token: String,
    /// Profile derived from the signed-in account.
    pub profile: Profile,
}

/// Auth lifecycle events emitted by the backend's event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    /// A session was established.
    SignedIn,
    /// The session ended.
    SignedOut,
    /// The session's token was renewed; identity is unchanged in practice
    /// but the payload is still authoritative.
    TokenRefreshed,
}

impl AuthEvent {
    /// Wire name of the event, for log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
        }
    }
}
