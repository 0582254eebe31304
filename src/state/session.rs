//! Bearer-token session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is provided via context and injected where needed instead of
//! living in an ambient global. The token is mirrored to `localStorage` so a
//! signed-in session survives page reloads within the same browser profile.
//! No expiry is enforced client-side; a stale token only surfaces when the
//! backend rejects a request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// In-memory session state backed by persistent token storage.
///
/// Invariant: absence of a token implies the unauthenticated state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Rebuild the session from the persisted token, if any.
    pub fn restore() -> Self {
        Self { token: storage::load_string(TOKEN_KEY) }
    }

    /// Store a freshly issued token and persist it.
    pub fn set_token(&mut self, token: String) {
        storage::save_string(TOKEN_KEY, &token);
        self.token = Some(token);
    }

    /// The current token, if one is held.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drop the token from memory and persistent storage.
    pub fn clear(&mut self) {
        storage::remove(TOKEN_KEY);
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Read the persisted token directly, bypassing any in-memory copy.
///
/// The API layer reads the token at call time rather than caching it, so a
/// logout in another tab takes effect on the next request.
pub fn persisted_token() -> Option<String> {
    storage::load_string(TOKEN_KEY)
}
