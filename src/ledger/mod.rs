//! Ledger boundary: wire types and the `LedgerClient` trait.
//!
//! The SDK talks to an algod-style REST node. Wire structs use the node's
//! kebab-case field names directly; everything here is plain data with no
//! network access. The concrete HTTP client lives in [`algod`] behind the
//! `http` feature — tests and embedders substitute their own
//! [`LedgerClient`].

pub mod confirm;
pub mod retry;

#[cfg(feature = "http")]
pub mod algod;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::shared::AddressStr;

/// A signed transaction blob, as returned by the external signer.
pub type SignedBytes = Vec<u8>;

/// Suggested transaction parameters from `GET /v2/transactions/params`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedParams {
    #[serde(rename = "fee")]
    pub fee: u64,
    #[serde(rename = "min-fee")]
    pub min_fee: u64,
    #[serde(rename = "last-round")]
    pub last_round: u64,
    #[serde(rename = "genesis-id")]
    pub genesis_id: String,
    /// Base64-encoded genesis hash.
    #[serde(rename = "genesis-hash")]
    pub genesis_hash: String,
    #[serde(rename = "consensus-version")]
    pub consensus_version: String,
}

impl SuggestedParams {
    /// Validity window derived from the node's last seen round.
    pub fn valid_window(&self) -> (u64, u64) {
        (self.last_round, self.last_round + 1000)
    }
}

/// Pending/confirmed transaction info from
/// `GET /v2/transactions/pending/{txid}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingInfo {
    /// Round the transaction was confirmed in; absent or zero while pending.
    #[serde(rename = "confirmed-round", default)]
    pub confirmed_round: Option<u64>,
    /// Asset id created by this transaction, when it was an asset creation.
    #[serde(rename = "asset-index", default)]
    pub asset_index: Option<u64>,
    /// Non-empty when the node kicked the transaction out of the pool.
    #[serde(rename = "pool-error", default)]
    pub pool_error: String,
}

impl PendingInfo {
    pub fn confirmed(&self) -> Option<u64> {
        self.confirmed_round.filter(|r| *r > 0)
    }
}

/// One asset held by an account, from `GET /v2/accounts/{addr}/assets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetHolding {
    #[serde(rename = "asset-id")]
    pub asset_id: u64,
    pub amount: u64,
    #[serde(rename = "is-frozen", default)]
    pub is_frozen: bool,
}

/// Asset parameters from `GET /v2/assets/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "unit-name", default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub total: u64,
    pub decimals: u32,
    #[serde(rename = "default-frozen", default)]
    pub default_frozen: bool,
    #[serde(default)]
    pub creator: Option<String>,
}

/// A ledger asset record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetInfo {
    pub index: u64,
    pub params: AssetParams,
}

/// The ledger node, as far as this SDK is concerned.
///
/// Implementations must not retry broadcasts; read-side calls may retry
/// internally (see [`retry`]).
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Current suggested transaction parameters.
    async fn suggested_params(&self) -> Result<SuggestedParams, LedgerError>;

    /// Broadcast signed transaction blobs; returns the transaction id.
    async fn send_raw_transaction(&self, blobs: &[SignedBytes]) -> Result<String, LedgerError>;

    /// Pending/confirmed status of a submitted transaction.
    async fn pending_info(&self, tx_id: &str) -> Result<PendingInfo, LedgerError>;

    /// Assets held by `address`.
    async fn account_assets(&self, address: &AddressStr) -> Result<Vec<AssetHolding>, LedgerError>;

    /// Full asset record by id.
    async fn asset_info(&self, asset_id: u64) -> Result<AssetInfo, LedgerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_info_wire_names() {
        let json = r#"{"confirmed-round": 123, "asset-index": 456, "pool-error": ""}"#;
        let info: PendingInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.confirmed(), Some(123));
        assert_eq!(info.asset_index, Some(456));
    }

    #[test]
    fn test_pending_info_zero_round_is_pending() {
        let json = r#"{"confirmed-round": 0, "pool-error": ""}"#;
        let info: PendingInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.confirmed(), None);
    }

    #[test]
    fn test_suggested_params_wire_names() {
        let json = r#"{
            "fee": 0,
            "min-fee": 1000,
            "last-round": 41000000,
            "genesis-id": "testnet-v1.0",
            "genesis-hash": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=",
            "consensus-version": "future"
        }"#;
        let sp: SuggestedParams = serde_json::from_str(json).unwrap();
        assert_eq!(sp.genesis_id, "testnet-v1.0");
        assert_eq!(sp.valid_window(), (41000000, 41001000));
    }
}
