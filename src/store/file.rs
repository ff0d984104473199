use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::PreferenceStore;
use crate::error::StoreError;

/// Preference store backed by a JSON object on disk.
///
/// The whole file is read once at [`open`](Self::open) and rewritten on every
/// mutation, so a value is durable as soon as `set` returns.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `entries` to disk and adopts them once the write succeeded.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<(), StoreError> {
        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| write_err(std::io::Error::new(ErrorKind::InvalidData, err)))?;
        fs::write(&self.path, json).map_err(write_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.get("theme").is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("theme-user-preference", "true").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get("theme-user-preference").as_deref(), Some("true"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "light").unwrap();
        store.remove("theme").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("theme").is_none());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path().join("sub/prefs.json")).unwrap();
        // A regular file where the parent directory should go.
        fs::write(dir.path().join("sub"), "").unwrap();

        let err = store.set("theme", "dark").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(store.get("theme").is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "\n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("theme").is_none());
    }
}
