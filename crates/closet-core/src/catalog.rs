//! Catalog Store
//!
//! The item list, newest listings first. Loaded once at startup and written
//! back to storage on every listing addition.

use chrono::Utc;

use crate::entity::find_by_id;
use crate::error::{ClosetError, Result};
use crate::model::{Item, ItemId};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load the persisted list, falling back to `seed` when the entry is
    /// missing, unreadable or not a valid item list
    pub fn load(store: &dyn KeyValueStore, key: &str, seed: Vec<Item>) -> Self {
        let saved = match store.get(key) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("[CATALOG] Storage read failed, using seed: {}", e);
                None
            }
        };

        let Some(json) = saved else {
            log::info!("[CATALOG] No saved catalog, using {} seed items", seed.len());
            return Self::new(seed);
        };

        match serde_json::from_str::<Vec<Item>>(&json) {
            Ok(items) => {
                log::info!("[CATALOG] Loaded {} items from storage", items.len());
                Self::new(items)
            }
            Err(e) => {
                log::warn!("[CATALOG] Saved catalog unparseable ({}), using seed", e);
                Self::new(seed)
            }
        }
    }

    /// Write the whole list under `key`
    pub fn persist(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<()> {
        let json = serde_json::to_string(&self.items)?;
        store.set(key, &json)?;
        log::debug!("[CATALOG] Persisted {} items", self.items.len());
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        find_by_id(&self.items, id)
    }

    /// Add an item in front of the list
    pub fn prepend(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Timestamp-derived ID, strictly greater than every existing ID
    pub fn next_id(&self) -> Result<ItemId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let Some(newest) = self.items.iter().map(|i| i.id).max() else {
            return Ok(ItemId(now));
        };
        let after = newest.0.checked_add(1).ok_or(ClosetError::IdsExhausted(newest))?;
        Ok(ItemId(now.max(after)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_items;
    use crate::storage::MemoryStore;

    const KEY: &str = "cc_items";

    #[test]
    fn test_load_uses_seed_when_absent() {
        let store = MemoryStore::new();
        let catalog = Catalog::load(&store, KEY, seed_items());
        assert_eq!(catalog.items(), seed_items().as_slice());
    }

    #[test]
    fn test_load_uses_seed_when_corrupt() {
        let mut store = MemoryStore::new();
        store.set(KEY, "{not json").unwrap();
        let catalog = Catalog::load(&store, KEY, seed_items());
        assert_eq!(catalog.len(), seed_items().len());
    }

    #[test]
    fn test_persist_then_load() {
        let mut store = MemoryStore::new();
        let mut catalog = Catalog::new(seed_items());
        let mut extra = seed_items()[0].clone();
        extra.id = ItemId(99);
        extra.title = "Persisted".to_string();
        catalog.prepend(extra);
        catalog.persist(&mut store, KEY).unwrap();

        let reloaded = Catalog::load(&store, KEY, Vec::new());
        assert_eq!(reloaded, catalog);
        assert_eq!(reloaded.items()[0].title, "Persisted");
    }

    #[test]
    fn test_next_id_is_unique() {
        let mut catalog = Catalog::new(seed_items());
        let far_future = ItemId(u64::MAX / 2);
        let mut item = seed_items()[0].clone();
        item.id = far_future;
        catalog.prepend(item);

        let id = catalog.next_id().unwrap();
        assert!(id > far_future);
        assert!(catalog.get(id).is_none());
    }

    #[test]
    fn test_next_id_after_max_stored_id() {
        let mut store = MemoryStore::new();
        let mut item = seed_items()[0].clone();
        item.id = ItemId(u64::MAX);
        store.set(KEY, &serde_json::to_string(&vec![item]).unwrap()).unwrap();

        let catalog = Catalog::load(&store, KEY, seed_items());
        assert_eq!(catalog.len(), 1);
        let err = catalog.next_id().unwrap_err();
        assert!(matches!(err, ClosetError::IdsExhausted(ItemId(u64::MAX))));
    }

    #[test]
    fn test_next_id_for_empty_catalog() {
        let id = Catalog::default().next_id().unwrap();
        assert!(id.0 > 0);
    }
}
