//! Merchant directory — the bounded set of addresses allowed to redeem.
//!
//! Locally persisted; enforcement on the ledger is a planned contract layer,
//! not part of this SDK. Address uniqueness is enforced here.

pub mod client;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::shared::AddressStr;
use crate::storage::{load_json, store_json, KvStore, KEY_MERCHANTS};

pub use client::Merchants;

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantEntry {
    pub address: AddressStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The persisted merchant directory, newest first.
pub struct MerchantDirectory {
    store: Arc<dyn KvStore>,
}

impl MerchantDirectory {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<MerchantEntry>, StorageError> {
        Ok(load_json(self.store.as_ref(), KEY_MERCHANTS)?.unwrap_or_default())
    }

    /// `true` when `address` is already present.
    pub fn contains(&self, address: &AddressStr) -> Result<bool, StorageError> {
        Ok(self.list()?.iter().any(|m| &m.address == address))
    }

    /// Prepend a new entry. The caller is responsible for uniqueness.
    pub fn insert(&self, entry: MerchantEntry) -> Result<(), StorageError> {
        let mut entries = self.list()?;
        entries.insert(0, entry);
        store_json(self.store.as_ref(), KEY_MERCHANTS, &entries)
    }

    /// Drop the entry for `address`, if present.
    pub fn remove(&self, address: &AddressStr) -> Result<(), StorageError> {
        let mut entries = self.list()?;
        entries.retain(|m| &m.address != address);
        store_json(self.store.as_ref(), KEY_MERCHANTS, &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const ADDR: &str = "MERCHANTAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    #[test]
    fn test_insert_and_contains() {
        let dir = MerchantDirectory::new(Arc::new(MemoryStore::new()));
        assert!(!dir.contains(&AddressStr::from(ADDR)).unwrap());
        dir.insert(MerchantEntry {
            address: AddressStr::from(ADDR),
            name: Some("Corner Store".to_string()),
        })
        .unwrap();
        assert!(dir.contains(&AddressStr::from(ADDR)).unwrap());
    }

    #[test]
    fn test_remove() {
        let dir = MerchantDirectory::new(Arc::new(MemoryStore::new()));
        dir.insert(MerchantEntry {
            address: AddressStr::from(ADDR),
            name: None,
        })
        .unwrap();
        dir.remove(&AddressStr::from(ADDR)).unwrap();
        assert!(dir.list().unwrap().is_empty());
    }
}
