use super::*;

fn business_user() -> CurrentUser {
    CurrentUser {
        id: "u-1".to_owned(),
        name: "Pat".to_owned(),
        email: "pat@example.com".to_owned(),
        role: Role::Business,
        verified: true,
    }
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn auth_state_starts_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.user().is_none());
}

#[test]
fn resolve_enters_authenticated_with_the_user() {
    let mut state = AuthState::default();
    state.resolve(business_user());
    assert!(!state.is_loading());
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u-1"));
    assert_eq!(state.role(), Some(Role::Business));
}

#[test]
fn resolve_unauthenticated_clears_any_user() {
    let mut state = AuthState::default();
    state.resolve(business_user());
    state.resolve_unauthenticated();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.user().is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn reset_loading_returns_to_the_initial_phase() {
    let mut state = AuthState::default();
    state.resolve_unauthenticated();
    state.reset_loading();
    assert!(state.is_loading());
}
