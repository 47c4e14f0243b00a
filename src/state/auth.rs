//! Auth state driving the navigation button groups.
//!
//! SYSTEM CONTEXT
//! ==============
//! The member group (greeting + logout) and the guest group (login +
//! register) are mutually exclusive. While the first lookup is pending
//! neither is shown.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session lookup has answered.
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn show_member_nav(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    pub fn show_guest_nav(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    pub fn greeting(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Welcome, {}", u.username))
    }
}
