//! Local Storage Backend

use closet_core::{ClosetError, KeyValueStore, MemoryStore, Result};

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// `None` when the host has no local storage (e.g. blocked by privacy settings)
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok()??;
        Some(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| ClosetError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| ClosetError::Storage(format!("{:?}", e)))
    }
}

/// Local storage if available, otherwise a session-only store
pub fn open_storage() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("[STORAGE] localStorage unavailable, listings are session-only");
            Box::new(MemoryStore::new())
        }
    }
}
