//! In-memory test doubles: a scripted [`Transport`], a recording
//! [`Navigator`] and a harness wiring them into an [`ApiClient`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::time::Instant;

use crate::config::ClientConfig;
use crate::http::ApiClient;
use crate::navigation::Navigator;
use crate::session::{SessionStore, SessionUser};
use crate::storage::MemoryStore;
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Base URL used by [`TestClient`].
pub const TEST_BASE_URL: &str = "http://api.test/api/v1";

struct Scripted {
    delay: Duration,
    outcome: Result<HttpResponse, TransportError>,
}

/// A request as seen by the transport, with the (tokio) instant it arrived.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request: HttpRequest,
    pub at: Instant,
}

/// Replays queued responses in order and records every request.
///
/// An exhausted script answers with a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    seen: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.push_delayed(response, Duration::ZERO);
    }

    /// Queue a response that is returned after `delay` of (tokio) time.
    pub fn push_delayed(&self, response: HttpResponse, delay: Duration) {
        self.lock_script().push_back(Scripted {
            delay,
            outcome: Ok(response),
        });
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(HttpResponse::new(status, body.to_string()));
    }

    /// Queue a successful envelope around `data`.
    pub fn push_ok(&self, data: Value) {
        self.push_json(200, ok_envelope(data));
    }

    pub fn push_error(&self, error: TransportError) {
        self.lock_script().push_back(Scripted {
            delay: Duration::ZERO,
            outcome: Err(error),
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop().map(|r| r.request)
    }

    pub fn remaining(&self) -> usize {
        self.lock_script().len()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Scripted>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                request: request.clone(),
                at: Instant::now(),
            });

        let next = self.lock_script().pop_front();
        match next {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.outcome
            }
            None => Err(TransportError::Network(format!(
                "no scripted response for {} {}",
                request.method, request.url
            ))),
        }
    }
}

/// One navigation observed by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Push(String),
    Hard(String),
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    log: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Navigation::Push(path.to_string()));
    }

    fn hard_redirect(&self, path: &str) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Navigation::Hard(path.to_string()));
    }
}

/// `{ "success": true, "data": data }`
pub fn ok_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// `{ "success": false, "message": message }`
pub fn rejected_envelope(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// A fake signed-in user with the given role.
pub fn user_with_role(role: &str) -> SessionUser {
    SessionUser {
        id: "user-1".into(),
        name: "Test User".into(),
        email: "test@example.com".into(),
        role: role.into(),
    }
}

/// An [`ApiClient`] over scripted doubles.
pub struct TestClient {
    pub client: ApiClient,
    pub transport: Arc<ScriptedTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub store: Arc<MemoryStore>,
}

impl TestClient {
    /// No token stored.
    pub fn anonymous() -> Self {
        let store = Arc::new(MemoryStore::new());
        let transport = Arc::new(ScriptedTransport::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let client = ApiClient::new(
            ClientConfig::new(TEST_BASE_URL),
            transport.clone(),
            SessionStore::new(store.clone()),
            navigator.clone(),
        );
        Self {
            client,
            transport,
            navigator,
            store,
        }
    }

    /// Signed in with token `test-token` and the given role.
    pub fn signed_in(role: &str) -> Self {
        let harness = Self::anonymous();
        harness
            .client
            .session()
            .sign_in("test-token", &user_with_role(role));
        harness
    }
}
