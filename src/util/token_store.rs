//! Durable storage for the session token.
//!
//! One `localStorage` key holds the raw bearer token; it is the only state
//! that survives a page reload. `BrowserTokenStore` requires a browser
//! environment and compiles to an empty store on the server.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use crate::config::TOKEN_STORAGE_KEY;

/// Synchronous key-value persistence for the one session token.
pub trait TokenStore {
    /// Whatever was last written, or `None`. Never fails.
    fn read(&self) -> Option<String>;

    /// Overwrite any prior value.
    fn write(&self, token: &str);

    /// Remove the value. Idempotent.
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
///
/// Storage failures (missing window, blocked storage) degrade to
/// `None`/no-op rather than erroring.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(TOKEN_STORAGE_KEY) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_STORAGE_KEY);
                }
            }
        }
    }
}

/// In-memory store: the fallback when persistence is unavailable, and the
/// test double for the session flows.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
