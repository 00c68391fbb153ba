//! Redemption records and the local redemption log.
//!
//! Redemption is not yet enforced on-chain; a redemption is a locally
//! persisted record created by a merchant. Records are immutable once
//! written and only ever leave the log through truncation at the cap.

pub mod client;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::shared::AddressStr;
use crate::storage::{load_json, store_json, KvStore, KEY_REDEMPTIONS};

pub use client::Redemptions;

/// Maximum number of retained redemption records.
pub const REDEMPTION_LOG_CAP: usize = 100;

/// One recorded redemption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub merchant: AddressStr,
    pub beneficiary: AddressStr,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RedemptionRecord {
    /// Fresh record with a random id and the current timestamp.
    pub(crate) fn new(
        merchant: AddressStr,
        beneficiary: AddressStr,
        amount: u64,
        note: Option<String>,
    ) -> Self {
        Self {
            id: hex::encode(rand::random::<[u8; 16]>()),
            timestamp: Utc::now(),
            merchant,
            beneficiary,
            amount,
            note,
        }
    }
}

/// The persisted redemption log, newest first.
pub struct RedemptionLog {
    store: Arc<dyn KvStore>,
}

impl RedemptionLog {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Replay the log from storage. Finite, restartable — every call
    /// re-reads; this is not a live subscription.
    pub fn list(&self) -> Result<Vec<RedemptionRecord>, StorageError> {
        Ok(load_json(self.store.as_ref(), KEY_REDEMPTIONS)?.unwrap_or_default())
    }

    /// Prepend `record`, truncate to the cap, persist.
    pub fn append(&self, record: RedemptionRecord) -> Result<RedemptionRecord, StorageError> {
        let mut records = self.list()?;
        records.insert(0, record.clone());
        records.truncate(REDEMPTION_LOG_CAP);
        store_json(self.store.as_ref(), KEY_REDEMPTIONS, &records)?;
        Ok(record)
    }
}
