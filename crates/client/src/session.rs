//! Signed-in session state: the bearer token and the user profile.
//!
//! The token lives under a single canonical key. Older builds wrote it
//! under a legacy key, and some flows left it in a cookie; [`SessionStore::bootstrap`]
//! migrates whichever is found first into the canonical key once at startup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use eduadmin_core::roles;

use crate::storage::KeyValueStore;

/// Canonical storage key for the access token.
pub const TOKEN_KEY: &str = "accessToken";

/// Legacy storage key for the access token.
pub const LEGACY_TOKEN_KEY: &str = "token";

/// Storage key for the signed-in user profile (JSON).
pub const USER_KEY: &str = "user";

/// Profile of the signed-in user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl SessionUser {
    pub fn is_staff(&self) -> bool {
        roles::is_staff(&self.role)
    }
}

/// Where the token was found during bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Canonical,
    LegacyKey,
    Cookie,
    Missing,
}

/// Session accessor over a [`KeyValueStore`]. Cheap to clone.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// One-time startup migration of the token into [`TOKEN_KEY`].
    ///
    /// Lookup order: canonical key, legacy key, then the cookie header
    /// (canonical cookie name before legacy). The legacy key is removed
    /// afterwards so later reads only consult the canonical key.
    pub fn bootstrap(&self, cookie_header: Option<&str>) -> TokenSource {
        let legacy = non_empty(self.store.get(LEGACY_TOKEN_KEY));
        if legacy.is_some() {
            self.store.remove(LEGACY_TOKEN_KEY);
        }

        if non_empty(self.store.get(TOKEN_KEY)).is_some() {
            return TokenSource::Canonical;
        }

        if let Some(token) = legacy {
            self.store.set(TOKEN_KEY, &token);
            tracing::info!("Migrated access token from legacy storage key");
            return TokenSource::LegacyKey;
        }

        let from_cookie = cookie_header.and_then(|header| {
            cookie_value(header, TOKEN_KEY).or_else(|| cookie_value(header, LEGACY_TOKEN_KEY))
        });
        if let Some(token) = from_cookie {
            self.store.set(TOKEN_KEY, &token);
            tracing::info!("Migrated access token from cookie");
            return TokenSource::Cookie;
        }

        TokenSource::Missing
    }

    /// Current access token, read fresh from storage.
    pub fn access_token(&self) -> Option<String> {
        non_empty(self.store.get(TOKEN_KEY))
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Signed-in user profile, if one is stored and parses.
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed stored user profile");
                None
            }
        }
    }

    /// Persist a new session.
    pub fn sign_in(&self, token: &str, user: &SessionUser) {
        self.store.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize user profile"),
        }
    }

    /// Remove every token key and the user profile.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(LEGACY_TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Extract a cookie value from a `Cookie` header string.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session(entries: &[(&str, &str)]) -> (SessionStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
        (SessionStore::new(store.clone()), store)
    }

    fn admin() -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn canonical_key_wins_and_legacy_is_removed() {
        let (session, store) = session(&[(TOKEN_KEY, "new"), (LEGACY_TOKEN_KEY, "old")]);
        assert_eq!(session.bootstrap(None), TokenSource::Canonical);
        assert_eq!(session.access_token().as_deref(), Some("new"));
        assert_eq!(store.get(LEGACY_TOKEN_KEY), None);
    }

    #[test]
    fn legacy_key_is_migrated() {
        let (session, store) = session(&[(LEGACY_TOKEN_KEY, "old")]);
        assert_eq!(session.bootstrap(Some("accessToken=cookie")), TokenSource::LegacyKey);
        assert_eq!(session.access_token().as_deref(), Some("old"));
        assert_eq!(store.keys(), vec![TOKEN_KEY.to_string()]);
    }

    #[test]
    fn cookie_is_last_resort() {
        let (session, _) = session(&[]);
        assert_eq!(
            session.bootstrap(Some("theme=dark; token=from-cookie")),
            TokenSource::Cookie
        );
        assert_eq!(session.access_token().as_deref(), Some("from-cookie"));
    }

    #[test]
    fn canonical_cookie_beats_legacy_cookie() {
        let (session, _) = session(&[]);
        session.bootstrap(Some("token=legacy; accessToken=canonical"));
        assert_eq!(session.access_token().as_deref(), Some("canonical"));
    }

    #[test]
    fn nothing_found() {
        let (session, _) = session(&[(TOKEN_KEY, "  ")]);
        assert_eq!(session.bootstrap(None), TokenSource::Missing);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn sign_in_and_clear() {
        let (session, store) = session(&[]);
        session.sign_in("tok", &admin());
        assert_eq!(session.user(), Some(admin()));
        assert!(session.user().unwrap().is_staff());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn malformed_user_is_ignored() {
        let (session, _) = session(&[(USER_KEY, "{not json")]);
        assert!(session.user().is_none());
    }

    #[test]
    fn cookie_parsing() {
        assert_eq!(cookie_value("a=1; b=2", "b").as_deref(), Some("2"));
        assert_eq!(cookie_value("a=1; b=", "b"), None);
        assert_eq!(cookie_value("", "a"), None);
    }
}
