//! Durable key-value store (theme, watchlist)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

pub const THEME_KEY: &str = "kinoflow:theme";
pub const WATCHLIST_KEY: &str = "kinoflow:watchlist";

/// String-to-string map persisted as a single JSON object.
///
/// Every `set` writes the whole file synchronously. An in-memory store
/// (no backing path) is used when the config directory is unavailable.
#[derive(Debug, Default)]
pub struct LocalStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

pub fn default_storage_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("kinoflow");
    fs::create_dir_all(&path).ok();
    path.push("storage.json");
    path
}

impl LocalStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self {
            path: Some(path),
            entries,
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
        self.flush();
    }

    fn flush(&self) {
        let Some(path) = &self.path else { return };
        match serde_json::to_string_pretty(&self.entries) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    warn!(path = %path.display(), error = %e, "failed to write storage");
                }
            }
            Err(e) => warn!(error = %e, "failed to encode storage"),
        }
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "storage unreadable, starting empty");
            return BTreeMap::new();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "storage malformed, starting empty");
        BTreeMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = LocalStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "light");

        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY), Some("light"));
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let store = LocalStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
        assert_eq!(store.get(WATCHLIST_KEY), None);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = LocalStore::in_memory();
        store.set(WATCHLIST_KEY, "[]");
        assert_eq!(store.get(WATCHLIST_KEY), Some("[]"));
    }
}
