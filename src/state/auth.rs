//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read this state to coordinate
//! login redirects and role-dependent rendering.
//!
//! STATE MACHINE
//! =============
//! `Loading` is the initial phase. It resolves to `Authenticated` when a
//! token is present and the identity fetch succeeds, and to `Unauthenticated`
//! when no token exists or the fetch fails for any reason. A failed fetch is
//! terminal for the navigation; there is no automatic retry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{CurrentUser, Role};

/// Identity resolution phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthPhase {
    /// Identity fetch not yet resolved.
    #[default]
    Loading,
    /// Token validated against the backend.
    Authenticated(CurrentUser),
    /// No token, or the identity fetch failed.
    Unauthenticated,
}

/// Authentication state wrapped in an `RwSignal` context by `app`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
}

impl AuthState {
    /// Enter `Authenticated` with the fetched identity.
    pub fn resolve(&mut self, user: CurrentUser) {
        self.phase = AuthPhase::Authenticated(user);
    }

    /// Enter `Unauthenticated` (missing token, failed fetch, or logout).
    pub fn resolve_unauthenticated(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
    }

    /// Re-enter `Loading`, e.g. before re-fetching identity after a login.
    pub fn reset_loading(&mut self) {
        self.phase = AuthPhase::Loading;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Loading)
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match &self.phase {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}
