//! Route-guard decisions for protected subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical behavior: wait while identity is
//! loading, redirect to login when unauthenticated, and bounce a signed-in
//! user of the wrong role to their own dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthPhase, AuthState};
use crate::net::types::Role;

/// What a protected route should do for the current auth phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Identity still resolving; render a placeholder.
    Wait,
    /// Render the requested subtree.
    Allow,
    /// Send the visitor to the login entry point.
    RedirectLogin,
    /// Signed in but in the wrong subtree; send to this role's dashboard.
    RedirectDashboard(Role),
}

/// Decide the guard outcome for `phase`, optionally requiring a role.
pub fn evaluate(phase: &AuthPhase, required_role: Option<Role>) -> GuardOutcome {
    match phase {
        AuthPhase::Loading => GuardOutcome::Wait,
        AuthPhase::Unauthenticated => GuardOutcome::RedirectLogin,
        AuthPhase::Authenticated(user) => match required_role {
            Some(role) if user.role != role => GuardOutcome::RedirectDashboard(user.role),
            _ => GuardOutcome::Allow,
        },
    }
}

/// Install an effect that performs the guard's redirects as auth resolves.
pub fn install_redirect<F>(auth: RwSignal<AuthState>, required_role: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        match evaluate(&auth.get().phase, required_role) {
            GuardOutcome::RedirectLogin => {
                navigate("/login", NavigateOptions { replace: true, ..Default::default() });
            }
            GuardOutcome::RedirectDashboard(role) => {
                navigate(role.dashboard_path(), NavigateOptions { replace: true, ..Default::default() });
            }
            GuardOutcome::Wait | GuardOutcome::Allow => {}
        }
    });
}
