//! Session lifecycle: bootstrap, login, logout.
//!
//! STATE MACHINE
//! =============
//! Three phases: `Bootstrapping` (entered once per page load, and again
//! while a login is in flight), `Authenticated`, and `Anonymous`. `login`
//! and `logout` re-enter the latter two for the lifetime of the page.
//!
//! The async flows are generic over the token store and the profile fetch
//! so they run under plain unit tests without a browser. Within one flow
//! the token write strictly precedes the profile fetch, which strictly
//! precedes the phase transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use crate::net::api::ApiError;
use crate::net::types::UserProfile;
use crate::util::token_store::TokenStore;

/// Session state, shared through context as `RwSignal<SessionState>`.
///
/// `user` is only ever present while `token` is present; any profile
/// fetch failure drops both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    /// A fresh page load starts in `Bootstrapping` until the stored
    /// token, if any, has been checked.
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

/// The three logical phases of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Bootstrapping,
    Authenticated,
    Anonymous,
}

impl SessionState {
    /// Cheap, non-networked check: a token is held. Server-side validity
    /// is only confirmed by a successful profile fetch.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Current phase. `loading` wins over everything else, covering both
    /// the initial bootstrap and an in-flight login.
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Bootstrapping
        } else if self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Start a login attempt: the new token is held, the profile is
    /// pending, and any previous user is dropped.
    pub fn begin_login(&mut self, token: String) {
        self.loading = true;
        self.user = None;
        self.token = Some(token);
    }

    /// The profile fetch for the held token succeeded.
    pub fn complete_login(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop everything and settle in `Anonymous`. Used by `logout`, the
    /// no-stored-token bootstrap path, and every failed profile fetch.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}

/// Restore a session from the store at application start.
///
/// No stored token settles in `Anonymous` immediately. A stored token is
/// checked against the profile endpoint; a stale token is discarded from
/// the store.
pub async fn bootstrap<S, F, Fut>(state: &mut SessionState, store: &S, fetch_profile: F)
where
    S: TokenStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<UserProfile, ApiError>>,
{
    let Some(token) = store.read() else {
        state.clear();
        return;
    };
    state.begin_login(token.clone());
    resolve(state, store, fetch_profile(token).await);
}

/// Persist a fresh token and fetch the profile for it.
///
/// The token write strictly precedes the profile fetch. `loading` is
/// false on every exit path, success or failure.
pub async fn login<S, F, Fut>(state: &mut SessionState, store: &S, token: String, fetch_profile: F)
where
    S: TokenStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<UserProfile, ApiError>>,
{
    state.begin_login(token.clone());
    store.write(&token);
    resolve(state, store, fetch_profile(token).await);
}

/// Synchronous, unconditional logout. Never fails.
pub fn logout<S: TokenStore>(state: &mut SessionState, store: &S) {
    store.clear();
    state.clear();
}

fn resolve<S: TokenStore>(
    state: &mut SessionState,
    store: &S,
    result: Result<UserProfile, ApiError>,
) {
    match result {
        Ok(user) => state.complete_login(user),
        Err(err) => {
            leptos::logging::warn!("session: profile fetch failed: {err}");
            store.clear();
            state.clear();
        }
    }
}
