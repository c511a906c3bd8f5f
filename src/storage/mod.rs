//! Durable string-keyed storage for favorites.
//!
//! The favorites store only ever touches one key, but the boundary is a plain
//! key-value interface so the backing medium can be swapped: a JSON file in
//! production, a map in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::FinderError;

/// A durable string-keyed key-value store.
///
/// `set` must be durable by the time it returns.
pub trait KeyValueStore: Send {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, FinderError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), FinderError>;
}
