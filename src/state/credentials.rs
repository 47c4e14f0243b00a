//! Bearer-token persistence and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is issued by the backend's login flow (outside this crate) and
//! read here for every authenticated request.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::rc::Rc;

use super::session::SessionCache;
use crate::util::navigator::Navigator;
use crate::util::storage::KeyValueStore;

/// Token storage under one fixed key.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
}

impl CredentialStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// The persisted token. An empty stored value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.storage.get(&self.key).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(&self.key, token);
    }

    pub fn remove_token(&self) {
        self.storage.remove(&self.key);
    }

    /// Forget the token and cached user, then send the browser to `home_path`.
    pub fn logout(&self, session: &SessionCache, navigator: &dyn Navigator, home_path: &str) {
        self.remove_token();
        session.clear_user_cache();
        log::debug!("logged out");
        navigator.assign(home_path);
    }
}
