use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::FinderError;

/// In-memory store for tests. Nothing survives the process.
///
/// `fail_writes` makes every `set` fail, to exercise the persistence error path.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, as if written by an earlier session.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError> {
        if self.fail_writes {
            return Err(FinderError::StorageError(std::io::Error::other(
                "storage quota exceeded",
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
