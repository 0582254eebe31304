use super::*;
use crate::net::types::CurrentUser;

fn user_with_role(role: Role) -> CurrentUser {
    CurrentUser {
        id: "u-1".to_owned(),
        name: "Pat".to_owned(),
        email: "pat@example.com".to_owned(),
        role,
        verified: true,
    }
}

// =============================================================
// Unauthenticated and loading phases
// =============================================================

#[test]
fn loading_waits_instead_of_redirecting() {
    assert_eq!(evaluate(&AuthPhase::Loading, None), GuardOutcome::Wait);
    assert_eq!(evaluate(&AuthPhase::Loading, Some(Role::Business)), GuardOutcome::Wait);
}

#[test]
fn no_token_resolution_redirects_to_login() {
    assert_eq!(evaluate(&AuthPhase::Unauthenticated, None), GuardOutcome::RedirectLogin);
    assert_eq!(
        evaluate(&AuthPhase::Unauthenticated, Some(Role::Influencer)),
        GuardOutcome::RedirectLogin
    );
}

// =============================================================
// Authenticated phase
// =============================================================

#[test]
fn authenticated_user_is_allowed_without_role_requirement() {
    let phase = AuthPhase::Authenticated(user_with_role(Role::Business));
    assert_eq!(evaluate(&phase, None), GuardOutcome::Allow);
}

#[test]
fn matching_role_is_allowed_never_redirected() {
    let phase = AuthPhase::Authenticated(user_with_role(Role::Influencer));
    assert_eq!(evaluate(&phase, Some(Role::Influencer)), GuardOutcome::Allow);
}

#[test]
fn mismatched_role_bounces_to_own_dashboard() {
    let phase = AuthPhase::Authenticated(user_with_role(Role::Influencer));
    assert_eq!(
        evaluate(&phase, Some(Role::Business)),
        GuardOutcome::RedirectDashboard(Role::Influencer)
    );
}
