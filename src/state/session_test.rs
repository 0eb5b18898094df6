use super::*;

use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use crate::util::token_store::{MemoryTokenStore, TokenStore};

fn profile(id: &str, display_name: &str) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        display_name: display_name.to_owned(),
        ..UserProfile::default()
    }
}

// =============================================================
// Defaults and phases
// =============================================================

#[test]
fn default_state_is_bootstrapping() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(state.phase(), SessionPhase::Bootstrapping);
}

#[test]
fn loading_wins_over_held_token() {
    let mut state = SessionState::default();
    state.begin_login("abc".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.phase(), SessionPhase::Bootstrapping);
}

#[test]
fn settled_phases_follow_the_token() {
    let mut state = SessionState::default();
    state.clear();
    assert_eq!(state.phase(), SessionPhase::Anonymous);

    state.begin_login("abc".to_owned());
    state.complete_login(profile("u1", "Jo"));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_authenticates() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();

    block_on(login(&mut state, &store, "abc".to_owned(), |_| async {
        Ok(profile("u1", "Jo"))
    }));

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert!(!state.loading);
    assert_eq!(store.read().as_deref(), Some("abc"));
}

#[test]
fn login_failure_goes_anonymous_and_clears_store() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();

    block_on(login(&mut state, &store, "abc".to_owned(), |_| async {
        Err(ApiError::Unauthorized)
    }));

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(store.read().is_none());
}

#[test]
fn login_network_failure_also_goes_anonymous() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();

    block_on(login(&mut state, &store, "abc".to_owned(), |_| async {
        Err(ApiError::Network("offline".to_owned()))
    }));

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(store.read().is_none());
}

#[test]
fn login_persists_token_before_the_fetch_runs() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    let seen = RefCell::new(None);

    block_on(login(&mut state, &store, "tok".to_owned(), |_| {
        *seen.borrow_mut() = store.read();
        async { Ok(profile("u1", "Jo")) }
    }));

    assert_eq!(seen.borrow().as_deref(), Some("tok"));
}

#[test]
fn login_replaces_a_previous_session() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();

    block_on(login(&mut state, &store, "first".to_owned(), |_| async {
        Ok(profile("u1", "Jo"))
    }));
    block_on(login(&mut state, &store, "second".to_owned(), |_| async {
        Ok(profile("u2", "Sam"))
    }));

    assert_eq!(state.token.as_deref(), Some("second"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
    assert_eq!(store.read().as_deref(), Some("second"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_from_authenticated_clears_everything() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    block_on(login(&mut state, &store, "abc".to_owned(), |_| async {
        Ok(profile("u1", "Jo"))
    }));

    logout(&mut state, &store);

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.user.is_none());
    assert!(store.read().is_none());
}

#[test]
fn logout_is_a_no_op_when_already_anonymous() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    state.clear();

    logout(&mut state, &store);

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(store.read().is_none());
}

// =============================================================
// bootstrap
// =============================================================

#[test]
fn bootstrap_without_stored_token_settles_anonymous() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    let fetched = Cell::new(false);

    block_on(bootstrap(&mut state, &store, |_| {
        fetched.set(true);
        async { Err::<UserProfile, _>(ApiError::Unauthorized) }
    }));

    assert!(!fetched.get());
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.loading);
}

#[test]
fn bootstrap_restores_a_valid_stored_token() {
    let store = MemoryTokenStore::default();
    store.write("abc");
    let mut state = SessionState::default();

    block_on(bootstrap(&mut state, &store, |token| async move {
        assert_eq!(token, "abc");
        Ok(profile("u1", "Jo"))
    }));

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(store.read().as_deref(), Some("abc"));
}

#[test]
fn bootstrap_discards_a_rejected_stored_token() {
    let store = MemoryTokenStore::default();
    store.write("expired");
    let mut state = SessionState::default();

    block_on(bootstrap(&mut state, &store, |_| async {
        Err(ApiError::Unauthorized)
    }));

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert!(store.read().is_none());
}
