//! In-memory fakes for the browser capability traits.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::app::Services;
use crate::config::ClientConfig;
use crate::net::http::{ApiError, ApiRequest, ApiResponse, HttpClient};
use crate::util::dom::DocumentRoot;
use crate::util::navigator::Navigator;
use crate::util::storage::MemoryStore;

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub struct ScriptedClient {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(ApiError::Transport(reason.to_owned())));
        self
    }

    /// Hold the next request open until the returned sender fires.
    pub fn gated(self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        (self, tx)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for ScriptedClient {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        self.requests.borrow_mut().push(request);
        let gate = self.gate.borrow_mut().take();
        Box::pin(async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
        })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    assigned: RefCell<Vec<String>>,
    reloads: Cell<usize>,
}

impl RecordingNavigator {
    pub fn assigned(&self) -> Vec<String> {
        self.assigned.borrow().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&self, url: &str) {
        self.assigned.borrow_mut().push(url.to_owned());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeRoot {
    classes: RefCell<HashSet<String>>,
}

impl FakeRoot {
    pub fn with_class(class: &str) -> Self {
        let root = Self::default();
        root.set_class(class, true);
        root
    }
}

impl DocumentRoot for FakeRoot {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }
}

/// Fakes wired into a `Services` bundle, with handles kept for assertions.
pub struct Harness {
    pub services: Services,
    pub storage: Rc<MemoryStore>,
    pub client: Rc<ScriptedClient>,
    pub navigator: Rc<RecordingNavigator>,
    pub root: Rc<FakeRoot>,
}

impl Harness {
    pub fn new(client: ScriptedClient) -> Self {
        Self::with_storage(client, MemoryStore::new())
    }

    pub fn signed_in(client: ScriptedClient) -> Self {
        Self::with_storage(client, MemoryStore::with_entries([("access_token", "tok-1")]))
    }

    pub fn with_storage(client: ScriptedClient, storage: MemoryStore) -> Self {
        let storage = Rc::new(storage);
        let client = Rc::new(client);
        let navigator = Rc::new(RecordingNavigator::default());
        let root = Rc::new(FakeRoot::default());
        let services = Services::new(
            ClientConfig::default(),
            storage.clone(),
            client.clone(),
            navigator.clone(),
            root.clone(),
        );
        Self { services, storage, client, navigator, root }
    }
}
