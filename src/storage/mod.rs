//! Key-value persistence boundary.
//!
//! The original system keeps its auxiliary records (active role, merchant
//! directory, redemption log, minted-asset cache) in browser local storage.
//! This module abstracts that as a plain string key-value store with no
//! transactional guarantees across keys; embedders may back it with a file,
//! a local database, or [`MemoryStore`]. Concurrent writers are
//! last-write-wins.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Storage key for the active role.
pub const KEY_ROLE: &str = "foodpass.role";
/// Storage key for the minted-asset-id cache.
pub const KEY_MINTED_ASSETS: &str = "foodpass.mintedAssetIds";
/// Storage key for the merchant directory.
pub const KEY_MERCHANTS: &str = "foodpass.merchants";
/// Storage key for the redemption log.
pub const KEY_REDEMPTIONS: &str = "foodpass.redemptions";

/// String key-value store. `Send + Sync` so one store can back several
/// concurrently running flows (two tabs against the same local storage).
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read a JSON-encoded value. Absent keys yield `None`; an unparseable
/// value surfaces as [`StorageError::Corrupt`] rather than being silently
/// replaced.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Write a value as JSON.
pub fn store_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write(e.to_string()))?;
    store.set(key, &raw)
}

/// In-memory store for tests and embedders without a durable backend.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .inner
            .lock()
            .map_err(|e| StorageError::Read(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        store_json(&store, "ids", &vec![1u64, 2, 3]).unwrap();
        let back: Option<Vec<u64>> = load_json(&store, "ids").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let store = MemoryStore::new();
        store.set("ids", "not-json").unwrap();
        let err = load_json::<Vec<u64>>(&store, "ids").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
