use super::*;

// =============================================================
// Display formatting
// =============================================================

#[test]
fn unauthenticated_message_mentions_signin() {
    assert_eq!(ApiError::Unauthenticated.to_string(), "you are not signed in");
}

#[test]
fn network_message_carries_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn rejected_message_is_surfaced_verbatim() {
    let err = ApiError::Rejected { status: 422, message: "email already registered".to_owned() };
    assert_eq!(err.to_string(), "email already registered");
}

#[test]
fn invalid_message_is_surfaced_verbatim() {
    let err = ApiError::invalid("campaign name is required");
    assert_eq!(err.to_string(), "campaign name is required");
}

#[test]
fn only_unauthenticated_is_an_auth_failure() {
    assert!(ApiError::Unauthenticated.is_auth_failure());
    assert!(!ApiError::Network("x".to_owned()).is_auth_failure());
    assert!(!ApiError::Rejected { status: 500, message: "x".to_owned() }.is_auth_failure());
    assert!(!ApiError::invalid("x").is_auth_failure());
}
