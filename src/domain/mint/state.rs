//! Minted-asset cache — bounded, advisory, locally persisted.
//!
//! The canonical record of a mint is the on-ledger asset; this cache only
//! feeds listing views. Most-recent-first, de-duplicated, capped at the 20
//! newest ids.

use std::sync::Arc;

use crate::error::StorageError;
use crate::events::{EventBus, EventKind};
use crate::storage::{load_json, store_json, KvStore, KEY_MINTED_ASSETS};

/// Maximum number of cached asset ids.
pub const MINTED_CACHE_CAP: usize = 20;

/// The bounded minted-asset-id cache.
pub struct MintedAssets {
    store: Arc<dyn KvStore>,
    bus: Arc<EventBus>,
}

impl MintedAssets {
    pub fn new(store: Arc<dyn KvStore>, bus: Arc<EventBus>) -> Self {
        Self { store, bus }
    }

    /// Cached ids, newest first.
    pub fn list(&self) -> Result<Vec<u64>, StorageError> {
        Ok(load_json(self.store.as_ref(), KEY_MINTED_ASSETS)?.unwrap_or_default())
    }

    /// Record a freshly minted asset id at position 0, dropping any older
    /// occurrence and anything beyond the cap, then notify listeners.
    pub fn push(&self, asset_id: u64) -> Result<(), StorageError> {
        let mut ids = self.list()?;
        ids.retain(|id| *id != asset_id);
        ids.insert(0, asset_id);
        ids.truncate(MINTED_CACHE_CAP);
        store_json(self.store.as_ref(), KEY_MINTED_ASSETS, &ids)?;
        self.bus.emit(EventKind::AssetsChanged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn cache() -> (MintedAssets, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (
            MintedAssets::new(Arc::new(MemoryStore::new()), bus.clone()),
            bus,
        )
    }

    #[test]
    fn test_newest_first() {
        let (cache, _) = cache();
        cache.push(1).unwrap();
        cache.push(2).unwrap();
        cache.push(3).unwrap();
        assert_eq!(cache.list().unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn test_deduplicates_and_moves_to_front() {
        let (cache, _) = cache();
        cache.push(1).unwrap();
        cache.push(2).unwrap();
        cache.push(1).unwrap();
        assert_eq!(cache.list().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_capped_at_twenty() {
        let (cache, _) = cache();
        for id in 0..30u64 {
            cache.push(id).unwrap();
        }
        let ids = cache.list().unwrap();
        assert_eq!(ids.len(), MINTED_CACHE_CAP);
        assert_eq!(ids[0], 29);
        assert_eq!(*ids.last().unwrap(), 10);
    }

    #[test]
    fn test_push_emits_assets_changed() {
        let (cache, bus) = cache();
        let rx = bus.subscribe(EventKind::AssetsChanged);
        cache.push(7).unwrap();
        assert!(rx.try_recv().is_ok());
    }
}
