//! Persistent key/value storage for client state (the browser's local
//! storage, in a headless client).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// String key/value storage shared by the session and the HTTP client.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Non-persistent store, used in tests and for throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Store persisted as a JSON object in a single file.
///
/// The file is read once on open and rewritten after every change. A
/// missing file starts empty; an unreadable one is logged and ignored.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt store file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read store file");
                BTreeMap::new()
            }
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        let result = serde_json::to_string_pretty(entries)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist store");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("eduadmin-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set("accessToken", "abc");
        assert_eq!(store.get("accessToken").as_deref(), Some("abc"));
        store.remove("accessToken");
        assert_eq!(store.get("accessToken"), None);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let path = temp_path("persist");
        let _ = std::fs::remove_file(&path);

        let store = FileStore::open(&path);
        store.set("accessToken", "abc");
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("accessToken").as_deref(), Some("abc"));
        reopened.remove("accessToken");
        assert_eq!(FileStore::open(&path).get("accessToken"), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get("anything"), None);
        let _ = std::fs::remove_file(&path);
    }
}
