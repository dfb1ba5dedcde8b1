//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards to coordinate login redirects: pages wait for the
//! initial `/api/auth/me` check before deciding the session is missing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::SessionInfo;

/// Authentication state tracking the staff session and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<SessionInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading so guards do not redirect before the first session
    /// check resolves.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}
