use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn base_url_defaults_to_local_backend() {
    assert!(base_url().starts_with("http"));
}

#[test]
fn api_url_joins_path_onto_origin() {
    let url = api_url("/api/auth/me");
    assert!(url.ends_with("/api/auth/me"));
    assert!(url.starts_with(base_url()));
}

// =============================================================
// Failure message extraction
// =============================================================

#[test]
fn failure_message_prefers_message_field() {
    let body = r#"{"message": "email already registered"}"#;
    assert_eq!(failure_message(409, body), "email already registered");
}

#[test]
fn failure_message_falls_back_to_error_field() {
    let body = r#"{"error": "invalid otp"}"#;
    assert_eq!(failure_message(400, body), "invalid otp");
}

#[test]
fn failure_message_generic_on_unstructured_body() {
    assert_eq!(failure_message(502, "<html>bad gateway</html>"), "request failed with status 502");
}

#[test]
fn failure_message_generic_on_empty_message() {
    let body = r#"{"message": ""}"#;
    assert_eq!(failure_message(500, body), "request failed with status 500");
}

#[test]
fn failure_message_generic_on_non_string_message() {
    let body = r#"{"message": {"code": 7}}"#;
    assert_eq!(failure_message(500, body), "request failed with status 500");
}
