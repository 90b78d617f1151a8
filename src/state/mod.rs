//! Reactive application state provided via context.

pub mod session;
