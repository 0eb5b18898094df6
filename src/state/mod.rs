//! Shared client-side state.
//!
//! The session is the only process-wide state; page-local fetch state
//! stays inside the pages that own it.

pub mod session;
