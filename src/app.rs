//! Service wiring and island mounting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered by the blog server. This crate mounts two Leptos
//! islands into placeholder elements: the navigation bar and the new-post
//! dialog. Both share one `Services` bundle, so they see the same session
//! cache.

use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::state::credentials::CredentialStore;
use crate::state::session::SessionCache;
use crate::util::dom::DocumentRoot;
use crate::util::navigator::Navigator;
use crate::util::storage::KeyValueStore;
use crate::util::theme::{self, Theme};

/// Follow-up the page performs after a UI action resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    Reload,
    GoToLogin,
}

/// Browser capabilities plus the session built on top of them.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<ClientConfig>,
    pub storage: Rc<dyn KeyValueStore>,
    pub client: Rc<dyn HttpClient>,
    pub navigator: Rc<dyn Navigator>,
    pub root: Rc<dyn DocumentRoot>,
    pub credentials: CredentialStore,
    pub session: SessionCache,
}

impl Services {
    pub fn new(
        config: ClientConfig,
        storage: Rc<dyn KeyValueStore>,
        client: Rc<dyn HttpClient>,
        navigator: Rc<dyn Navigator>,
        root: Rc<dyn DocumentRoot>,
    ) -> Self {
        let credentials = CredentialStore::new(Rc::clone(&storage), config.token_key.clone());
        let session = SessionCache::new(credentials.clone(), Rc::clone(&client), config.api_base.clone());
        Self { config: Rc::new(config), storage, client, navigator, root, credentials, session }
    }

    /// Services backed by the real window, storage and fetch.
    #[cfg(feature = "csr")]
    pub fn browser(config: ClientConfig) -> Self {
        use crate::net::http::GlooHttpClient;
        use crate::util::dom::BrowserDocumentRoot;
        use crate::util::navigator::BrowserNavigator;
        use crate::util::storage::BrowserStorage;

        Self::new(
            config,
            Rc::new(BrowserStorage),
            Rc::new(GlooHttpClient),
            Rc::new(BrowserNavigator),
            Rc::new(BrowserDocumentRoot),
        )
    }

    pub fn logout(&self) {
        self.credentials.logout(&self.session, self.navigator.as_ref(), &self.config.home_path);
    }

    pub fn go_to_login(&self) {
        self.navigator.assign(&self.config.login_path);
    }

    pub fn go_to_register(&self) {
        self.navigator.assign(&self.config.register_path);
    }

    pub fn current_theme(&self) -> Theme {
        theme::current(self.root.as_ref())
    }

    pub fn restore_theme(&self) -> Theme {
        theme::restore(self.storage.as_ref(), self.root.as_ref(), &self.config.theme_key)
    }

    pub fn toggle_theme(&self) -> Theme {
        theme::toggle(self.storage.as_ref(), self.root.as_ref(), &self.config.theme_key)
    }

    pub fn perform(&self, action: PageAction) {
        match action {
            PageAction::Reload => self.navigator.reload(),
            PageAction::GoToLogin => self.go_to_login(),
        }
    }
}

#[cfg(feature = "csr")]
fn mount_point(id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Restore the theme and mount every island whose placeholder is on the page.
#[cfg(feature = "csr")]
pub fn mount_islands(services: Services) {
    use leptos::prelude::*;

    use crate::components::nav_bar::NavBar;
    use crate::components::new_post_modal::NewPostModal;

    services.restore_theme();
    let config = Rc::clone(&services.config);

    let nav_services = services.clone();
    match mount_point(&config.nav_mount_id) {
        Some(el) => leptos::mount::mount_to(el, move || view! { <NavBar services=nav_services/> }).forget(),
        None => log::debug!("no #{} on this page, skipping nav", config.nav_mount_id),
    }
    match mount_point(&config.new_post_mount_id) {
        Some(el) => leptos::mount::mount_to(el, move || view! { <NewPostModal services=services/> }).forget(),
        None => log::debug!("no #{} on this page, skipping new-post dialog", config.new_post_mount_id),
    }
}
