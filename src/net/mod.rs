//! Networking modules for the hosted backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `auth_events` carries the backend's auth
//! lifecycle stream to in-process listeners, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod auth_events;
pub mod types;
