//! HTTP access to the remote music-data API.

pub mod api;
pub mod types;
