use super::*;

// =============================================================
// Token round-trip
// =============================================================

#[test]
fn default_session_has_no_token() {
    let session = SessionState::default();
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn set_then_get_returns_identical_token() {
    let mut session = SessionState::default();
    session.set_token("tok-abc-123".to_owned());
    assert_eq!(session.token(), Some("tok-abc-123"));
    assert!(session.is_authenticated());
}

#[test]
fn clear_then_get_returns_none() {
    let mut session = SessionState::default();
    session.set_token("tok-abc-123".to_owned());
    session.clear();
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn set_overwrites_previous_token() {
    let mut session = SessionState::default();
    session.set_token("first".to_owned());
    session.set_token("second".to_owned());
    assert_eq!(session.token(), Some("second"));
}

#[test]
fn token_key_is_stable() {
    // Changing the storage key silently logs out every existing session.
    assert_eq!(TOKEN_KEY, "auth_token");
}
