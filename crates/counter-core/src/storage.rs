//! Persistence Adapter
//!
//! The count survives reloads through a single string entry in a key-value
//! store. The store is injected so the browser's `localStorage` and the
//! in-memory [`MemoryStore`] are interchangeable.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

use crate::error::StorageResult;
use crate::state::parse_stored_count;

/// Synchronous string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same entries, so a second session
/// mounted on a clone behaves like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value currently held for `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The persisted count entry
#[derive(Debug, Clone)]
pub struct PersistedCount<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> PersistedCount<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last saved count, or 0 when the entry is missing, corrupt or the
    /// store fails. Callers clamp the result into their bounds.
    pub fn load(&self) -> i64 {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => parse_stored_count(&raw).unwrap_or_else(|| {
                debug!("ignoring unparsable `{}` entry {:?}", self.key, raw);
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                debug!("{err}; starting from 0");
                0
            }
        }
    }

    /// Overwrite the entry with `count`. Failures are logged and dropped.
    pub fn save(&self, count: i64) {
        if let Err(err) = self.store.set(&self.key, &count.to_string()) {
            warn!("{err}");
        }
    }
}
