//! Durable key-value storage for theme preferences.
//!
//! - [`PreferenceStore`]: the synchronous string store the resolver writes to
//! - [`MemoryStore`]: shared in-memory store, mostly for tests and embedding
//! - [`FileStore`]: JSON file that survives process restarts

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A synchronous, origin-scoped string store.
///
/// Reads never fail: an unreadable entry is simply absent. Writes are
/// immediate from the caller's point of view.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
