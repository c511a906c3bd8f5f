use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::FinderError;

/// All keys live in a single JSON object on disk.
///
/// The file is read when opened and rewritten in full on every `set`. Writes
/// go to a sibling tmp file that is renamed over the store, so a failed write
/// never leaves a truncated store behind.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FinderError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        debug!("Opened store at {:?} ({} keys)", path, entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), FinderError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_set_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("favorites", "[]").unwrap();
        store.set("other", "x").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(FinderError::SerializationError(_))));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("favorites", "[1]").unwrap();

        // Replace the file with a directory so the next write fails
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let result = store.set("favorites", "[1,2]");
        assert!(matches!(result, Err(FinderError::StorageError(_))));
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_failed_write_leaves_reopenable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("favorites", "[]").unwrap();

        // Block the tmp file so the next write fails before the rename
        fs::create_dir(dir.path().join(".store.json.tmp")).unwrap();

        let result = store.set("favorites", &"x".repeat(4096));
        assert!(matches!(result, Err(FinderError::StorageError(_))));
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_successful_write_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("favorites", "[]").unwrap();

        assert!(path.exists());
        assert!(!dir.path().join(".store.json.tmp").exists());
    }
}
