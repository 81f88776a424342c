//! Key-Value Storage
//!
//! The only persistence the app has: string values by key. The browser backs
//! this with `window.localStorage`; tests and storage-less hosts use
//! [`MemoryStore`].

use std::collections::HashMap;

use crate::error::Result;

/// String key-value store
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, lost on reload
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("cc_items").unwrap().is_none());

        store.set("cc_items", "[]").unwrap();
        assert_eq!(store.get("cc_items").unwrap().as_deref(), Some("[]"));

        store.set("cc_items", "[1]").unwrap();
        assert_eq!(store.get("cc_items").unwrap().as_deref(), Some("[1]"));
    }
}
