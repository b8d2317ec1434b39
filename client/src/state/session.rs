//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication is handled by an external provider. The layout only reads
//! this state to decide whether navigation shows a display name or a sign-in
//! link.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Signed-in user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

/// Session state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in navigation. Falls back to the email when the provider
    /// returned a blank name.
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        let name = user.name.trim();
        if name.is_empty() { Some(user.email.as_str()) } else { Some(name) }
    }
}
