use super::*;

// =============================================================
// Guard decision table
// =============================================================

#[test]
fn bootstrapping_waits() {
    assert_eq!(guard(SessionPhase::Bootstrapping), GuardOutcome::Wait);
}

#[test]
fn authenticated_allows() {
    assert_eq!(guard(SessionPhase::Authenticated), GuardOutcome::Allow);
}

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(guard(SessionPhase::Anonymous), GuardOutcome::RedirectToLogin);
}

// =============================================================
// Phase interaction
// =============================================================

#[test]
fn waits_while_loading_even_with_a_token_held() {
    let mut state = SessionState::default();
    state.begin_login("abc".to_owned());
    assert_eq!(guard(state.phase()), GuardOutcome::Wait);
}

#[test]
fn redirects_exactly_when_settled_and_unauthenticated() {
    let mut state = SessionState::default();
    state.clear();
    assert!(!state.is_authenticated());
    assert_eq!(guard(state.phase()), GuardOutcome::RedirectToLogin);
}
