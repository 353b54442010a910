//! Local Storage
//!
//! `window.localStorage` as a [`KeyValueStore`].

use std::rc::Rc;

use counter_core::{KeyValueStore, MemoryStore, StorageError, StorageResult};

/// The page's `localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Storage for this page: `localStorage` when the browser allows it,
/// otherwise an in-memory map that lasts until reload.
pub fn page_storage() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            log::warn!("{}; count will not survive a reload", err);
            Rc::new(MemoryStore::new())
        }
    }
}
