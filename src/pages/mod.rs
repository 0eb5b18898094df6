//! Top-level routed pages.

pub mod album;
pub mod artist;
pub mod callback;
pub mod dashboard;
pub mod login;
pub mod search;
