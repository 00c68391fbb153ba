//! Read-side asset views: holdings of the connected account, and voucher
//! details decoded from on-ledger asset records.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::domain::mint::VoucherMetadata;
use crate::ledger::AssetInfo;

pub use client::Assets;

/// An on-ledger asset together with its decoded voucher metadata, when the
/// asset URL carries one. Non-voucher assets still come through, just
/// without metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherAsset {
    pub info: AssetInfo,
    pub metadata: Option<VoucherMetadata>,
}

impl From<AssetInfo> for VoucherAsset {
    fn from(info: AssetInfo) -> Self {
        let metadata = info
            .params
            .url
            .as_deref()
            .and_then(VoucherMetadata::from_data_url);
        Self { info, metadata }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::AssetParams;

    #[test]
    fn test_decodes_voucher_url() {
        let meta = VoucherMetadata {
            name: "FoodPass NFT".to_string(),
            description: "Digital food voucher for humanitarian aid".to_string(),
            issuer: "NGO".to_string(),
            campaign_id: "c1".to_string(),
            max_units: 5,
            remaining_units: 5,
            expiry_date: "2026-12-31".to_string(),
            redeemable: true,
        };
        let info = AssetInfo {
            index: 1,
            params: AssetParams {
                url: Some(meta.to_data_url().unwrap()),
                ..AssetParams::default()
            },
        };
        let asset = VoucherAsset::from(info);
        assert_eq!(asset.metadata, Some(meta));
    }

    #[test]
    fn test_foreign_asset_has_no_metadata() {
        let info = AssetInfo {
            index: 2,
            params: AssetParams {
                url: Some("ipfs://something".to_string()),
                ..AssetParams::default()
            },
        };
        assert!(VoucherAsset::from(info).metadata.is_none());
    }
}
