//! Voucher minting: parameters, metadata, and the unsigned asset-creation
//! transaction.
//!
//! A voucher is one non-fungible ledger asset (supply 1, zero decimals,
//! frozen by default) whose descriptive URL carries the voucher metadata as
//! an URL-encoded `data:application/json` payload. All four authority roles
//! stay with the creator so the issuer retains control of the asset.

pub mod client;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::ledger::SuggestedParams;
use crate::shared::AddressStr;

pub use client::Minting;
pub use state::MintedAssets;

/// Unit name stamped on every voucher asset.
pub const VOUCHER_UNIT_NAME: &str = "FOODPASS";

const DATA_URL_PREFIX: &str = "data:application/json,";

/// Caller-supplied mint parameters. Transient — nothing here is persisted
/// beyond the resulting on-ledger asset.
#[derive(Debug, Clone)]
pub struct MintParams {
    pub issuer: String,
    pub campaign_id: String,
    /// Meals/value units backing this voucher. Must be positive.
    pub max_units: u64,
    /// Expiry date, `YYYY-MM-DD`.
    pub expiry_date: String,
}

/// Metadata embedded in the asset URL. Field names match what existing
/// vouchers on the ledger already carry, hence camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherMetadata {
    pub name: String,
    pub description: String,
    pub issuer: String,
    pub campaign_id: String,
    pub max_units: u64,
    pub remaining_units: u64,
    pub expiry_date: String,
    pub redeemable: bool,
}

impl VoucherMetadata {
    fn for_mint(params: &MintParams) -> Self {
        Self {
            name: "FoodPass NFT".to_string(),
            description: "Digital food voucher for humanitarian aid".to_string(),
            issuer: params.issuer.clone(),
            campaign_id: params.campaign_id.clone(),
            max_units: params.max_units,
            remaining_units: params.max_units,
            expiry_date: params.expiry_date.clone(),
            redeemable: true,
        }
    }

    /// Encode as the asset's descriptive URL.
    pub fn to_data_url(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{}{}", DATA_URL_PREFIX, urlencoding::encode(&json)))
    }

    /// Decode from an asset URL, if it carries a metadata payload.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let encoded = url.strip_prefix(DATA_URL_PREFIX)?;
        let json = urlencoding::decode(encoded).ok()?;
        serde_json::from_str(&json).ok()
    }
}

/// Asset-configuration fields of an asset-creation transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCreateParams {
    pub total: u64,
    pub decimals: u32,
    pub default_frozen: bool,
    pub unit_name: String,
    pub asset_name: String,
    pub url: String,
    pub manager: AddressStr,
    pub reserve: AddressStr,
    pub freeze: AddressStr,
    pub clawback: AddressStr,
}

/// A fully-specified but unsigned asset-creation transaction.
///
/// This is the typed form handed to the external signer; canonical ledger
/// encoding happens inside the signer, which also holds the keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    pub sender: AddressStr,
    pub fee: u64,
    pub first_valid: u64,
    pub last_valid: u64,
    pub genesis_id: String,
    pub genesis_hash: String,
    pub asset_params: AssetCreateParams,
}

/// Reference to a successfully minted voucher. Immutable; the canonical
/// record lives on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintedAssetRef {
    pub asset_id: u64,
    pub tx_id: String,
}

/// Build the unsigned asset-creation transaction for one voucher.
///
/// Pure: validates inputs and constructs the transaction, nothing else.
/// Fails with `InvalidParameters` when `max_units` is zero, any required
/// field is blank, or `creator` is not a plausible address.
pub fn build_mint_txn(
    params: &MintParams,
    creator: &AddressStr,
    sp: &SuggestedParams,
) -> Result<UnsignedTransaction, SdkError> {
    if params.max_units == 0 {
        return Err(SdkError::InvalidParameters(
            "max units must be greater than zero".to_string(),
        ));
    }
    for (field, value) in [
        ("issuer", &params.issuer),
        ("campaign id", &params.campaign_id),
        ("expiry date", &params.expiry_date),
    ] {
        if value.trim().is_empty() {
            return Err(SdkError::InvalidParameters(format!("{field} must not be blank")));
        }
    }
    if !creator.is_plausible() {
        return Err(SdkError::InvalidParameters(
            "creator address is not plausible".to_string(),
        ));
    }

    let url = VoucherMetadata::for_mint(params).to_data_url()?;
    let (first_valid, last_valid) = sp.valid_window();

    Ok(UnsignedTransaction {
        sender: creator.clone(),
        fee: sp.fee.max(sp.min_fee),
        first_valid,
        last_valid,
        genesis_id: sp.genesis_id.clone(),
        genesis_hash: sp.genesis_hash.clone(),
        asset_params: AssetCreateParams {
            total: 1,
            decimals: 0,
            default_frozen: true,
            unit_name: VOUCHER_UNIT_NAME.to_string(),
            asset_name: format!("FoodPass • {}", params.campaign_id),
            url,
            manager: creator.clone(),
            reserve: creator.clone(),
            freeze: creator.clone(),
            clawback: creator.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATOR: &str = "OE44RO4QS3A7HCLMJZZDV5TJ3T5Z6LOZSY3XYNDN3ZV7FC4GEZFJLOI45Y";

    fn sp() -> SuggestedParams {
        SuggestedParams {
            fee: 0,
            min_fee: 1000,
            last_round: 41000000,
            genesis_id: "testnet-v1.0".to_string(),
            genesis_hash: "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=".to_string(),
            consensus_version: "future".to_string(),
        }
    }

    fn params() -> MintParams {
        MintParams {
            issuer: "NGO Name".to_string(),
            campaign_id: "demo-campaign-001".to_string(),
            max_units: 30,
            expiry_date: "2026-12-31".to_string(),
        }
    }

    #[test]
    fn test_build_mint_txn_non_fungible_shape() {
        let txn = build_mint_txn(&params(), &AddressStr::from(CREATOR), &sp()).unwrap();
        assert_eq!(txn.asset_params.total, 1);
        assert_eq!(txn.asset_params.decimals, 0);
        assert!(txn.asset_params.default_frozen);
        assert_eq!(txn.asset_params.unit_name, VOUCHER_UNIT_NAME);
        assert_eq!(txn.asset_params.asset_name, "FoodPass • demo-campaign-001");
        // All authority roles stay with the creator.
        assert_eq!(txn.asset_params.manager.as_str(), CREATOR);
        assert_eq!(txn.asset_params.reserve.as_str(), CREATOR);
        assert_eq!(txn.asset_params.freeze.as_str(), CREATOR);
        assert_eq!(txn.asset_params.clawback.as_str(), CREATOR);
        assert_eq!(txn.fee, 1000);
        assert_eq!((txn.first_valid, txn.last_valid), (41000000, 41001000));
    }

    #[test]
    fn test_zero_units_rejected() {
        let mut p = params();
        p.max_units = 0;
        let err = build_mint_txn(&p, &AddressStr::from(CREATOR), &sp()).unwrap_err();
        assert!(matches!(err, SdkError::InvalidParameters(_)));
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut p = params();
        p.campaign_id = "   ".to_string();
        assert!(build_mint_txn(&p, &AddressStr::from(CREATOR), &sp()).is_err());
    }

    #[test]
    fn test_implausible_creator_rejected() {
        let err = build_mint_txn(&params(), &AddressStr::from("short"), &sp()).unwrap_err();
        assert!(matches!(err, SdkError::InvalidParameters(_)));
    }

    #[test]
    fn test_metadata_data_url_roundtrip() {
        let meta = VoucherMetadata::for_mint(&params());
        let url = meta.to_data_url().unwrap();
        assert!(url.starts_with("data:application/json,"));
        let back = VoucherMetadata::from_data_url(&url).unwrap();
        assert_eq!(back, meta);
        assert_eq!(back.remaining_units, 30);
        assert!(back.redeemable);
    }

    #[test]
    fn test_metadata_field_names_are_camel_case() {
        let meta = VoucherMetadata::for_mint(&params());
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"campaignId\""));
        assert!(json.contains("\"maxUnits\""));
        assert!(json.contains("\"remainingUnits\""));
        assert!(json.contains("\"expiryDate\""));
    }

    #[test]
    fn test_from_data_url_rejects_foreign_urls() {
        assert!(VoucherMetadata::from_data_url("https://example.com/a.json").is_none());
    }
}
