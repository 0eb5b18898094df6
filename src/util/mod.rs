//! Browser storage and display-formatting helpers.

pub mod format;
pub mod token_store;
