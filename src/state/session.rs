//! Per-page cache of the authenticated user.
//!
//! DESIGN
//! ======
//! The first `get_user` call with a token starts one `/api/users/me` lookup
//! and parks it in the slot as a `Shared` future. Callers arriving while it
//! is pending clone that handle instead of issuing their own request. When
//! the lookup finishes it stores the user (on success) and empties the slot,
//! so a cached user and a pending lookup never coexist.
//!
//! Failures degrade to anonymous: the caller sees `None`, nothing is cached,
//! and the next call tries again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use super::credentials::CredentialStore;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::User;

type Lookup = Shared<LocalBoxFuture<'static, Option<User>>>;

#[derive(Default)]
struct SessionSlot {
    user: Option<User>,
    in_flight: Option<Lookup>,
}

struct SessionInner {
    credentials: CredentialStore,
    client: Rc<dyn HttpClient>,
    api_base: String,
    slot: RefCell<SessionSlot>,
}

/// Cheaply clonable handle; clones share one cache.
#[derive(Clone)]
pub struct SessionCache {
    inner: Rc<SessionInner>,
}

impl SessionCache {
    pub fn new(credentials: CredentialStore, client: Rc<dyn HttpClient>, api_base: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                credentials,
                client,
                api_base: api_base.into(),
                slot: RefCell::new(SessionSlot::default()),
            }),
        }
    }

    /// Current user, fetching it at most once per outstanding lookup.
    pub async fn get_user(&self) -> Option<User> {
        let lookup = {
            let mut slot = self.inner.slot.borrow_mut();
            if let Some(user) = &slot.user {
                return Some(user.clone());
            }
            if let Some(pending) = slot.in_flight.clone() {
                pending
            } else {
                let token = self.inner.credentials.token()?;
                let lookup = Self::lookup(Rc::clone(&self.inner), token).boxed_local().shared();
                slot.in_flight = Some(lookup.clone());
                lookup
            }
        };
        lookup.await
    }

    async fn lookup(inner: Rc<SessionInner>, token: String) -> Option<User> {
        let result = api::fetch_current_user(inner.client.as_ref(), &inner.api_base, &token).await;
        let mut slot = inner.slot.borrow_mut();
        slot.in_flight = None;
        match result {
            Ok(user) => {
                slot.user = Some(user.clone());
                Some(user)
            }
            Err(e) => {
                log::debug!("identity lookup failed, continuing as guest: {e}");
                slot.user = None;
                None
            }
        }
    }

    /// Drop the cached user so the next `get_user` refetches.
    pub fn clear_user_cache(&self) {
        self.inner.slot.borrow_mut().user = None;
    }

    pub fn cached_user(&self) -> Option<User> {
        self.inner.slot.borrow().user.clone()
    }

    pub fn is_lookup_in_flight(&self) -> bool {
        self.inner.slot.borrow().in_flight.is_some()
    }
}
