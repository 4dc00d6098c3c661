//! Composition root.

use std::sync::{Arc, Mutex, PoisonError};

use eduadmin_client::config::ClientConfig;
use eduadmin_client::navigation::Navigator;
use eduadmin_client::session::{SessionStore, TokenSource};
use eduadmin_client::storage::{FileStore, KeyValueStore};
use eduadmin_client::transport::{ReqwestTransport, Transport};
use eduadmin_client::ApiClient;

use crate::context::PageContext;
use crate::pages::confirm::{Confirm, FixedAnswer};
use crate::shell::error_handler::ErrorHandler;
use crate::shell::routes::{self, RouteDecision, Visitor, HOME_PATH};
use crate::shell::toast::Toaster;

/// Host settings on top of [`ClientConfig`].
///
/// | Env Var                 | Default                   |
/// |-------------------------|---------------------------|
/// | `EDUADMIN_STORAGE_PATH` | `.eduadmin-session.json`  |
/// | `SESSION_COOKIE`        | unset                     |
/// | `CONFIRM_ACTIONS`       | `false`                   |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub session_file: String,
    /// Raw `Cookie` header to migrate a token from on first start.
    pub session_cookie: Option<String>,
    /// Answer to every confirmation prompt when running headless.
    pub confirm_actions: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let session_file = std::env::var("EDUADMIN_STORAGE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| ".eduadmin-session.json".into());
        let session_cookie = std::env::var("SESSION_COOKIE")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let confirm_actions = std::env::var("CONFIRM_ACTIONS")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            client: ClientConfig::from_env(),
            session_file,
            session_cookie,
            confirm_actions,
        }
    }
}

/// Navigator for a headless host: keeps the current location and logs
/// every move.
#[derive(Debug)]
pub struct LocationNavigator {
    current: Mutex<String>,
}

impl LocationNavigator {
    pub fn new(start: &str) -> Self {
        Self {
            current: Mutex::new(start.to_string()),
        }
    }

    pub fn current(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, path: &str) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = path.to_string();
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigate");
        self.set(path);
    }

    fn hard_redirect(&self, path: &str) {
        tracing::warn!(path, "Hard redirect");
        self.set(path);
    }
}

/// Shared services built once at startup.
#[derive(Clone)]
pub struct App {
    pub client: ApiClient,
    pub toaster: Toaster,
    pub errors: ErrorHandler,
    pub ctx: PageContext,
}

impl App {
    /// Production wiring: file-backed session and the reqwest transport.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(config.client.timeout)?;
        let store = Arc::new(FileStore::open(&config.session_file));
        let navigator = Arc::new(LocationNavigator::new(HOME_PATH));
        let confirm = Arc::new(FixedAnswer(config.confirm_actions));

        let app = Self::with_parts(
            config.client,
            store,
            Arc::new(transport),
            navigator,
            confirm,
        );
        let source = app.client.session().bootstrap(config.session_cookie.as_deref());
        if source == TokenSource::Missing {
            tracing::info!("No stored session");
        }
        Ok(app)
    }

    /// Wire the app from explicit parts.
    pub fn with_parts(
        config: ClientConfig,
        store: Arc<dyn KeyValueStore>,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        tracing::info!(base_url = %config.base_url, "Building dashboard");
        let client = ApiClient::new(config, transport, SessionStore::new(store), navigator.clone());
        let toaster = Toaster::new();
        let ctx = PageContext::new(toaster.clone(), navigator, confirm);
        Self {
            client,
            errors: ctx.errors.clone(),
            toaster,
            ctx,
        }
    }

    pub fn visitor(&self) -> Visitor {
        Visitor::from_session(self.client.session())
    }

    /// Resolve a path for the current session.
    pub fn resolve(&self, path: &str) -> RouteDecision {
        routes::resolve(path, &self.visitor())
    }
}
