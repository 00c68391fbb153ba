//! Assets sub-client — ledger reads for listing views.

use crate::client::FoodPassClient;
use crate::domain::asset::VoucherAsset;
use crate::error::SdkError;
use crate::ledger::AssetHolding;

/// Sub-client for read-only asset views.
pub struct Assets<'a> {
    pub(crate) client: &'a FoodPassClient,
}

impl<'a> Assets<'a> {
    /// Assets held by the connected account.
    pub async fn holdings(&self) -> Result<Vec<AssetHolding>, SdkError> {
        let identity = self
            .client
            .active_address()
            .await
            .ok_or(SdkError::NotConnected)?;
        Ok(self.client.ledger.account_assets(&identity).await?)
    }

    /// One asset record with its voucher metadata decoded, when present.
    pub async fn info(&self, asset_id: u64) -> Result<VoucherAsset, SdkError> {
        let info = self.client.ledger.asset_info(asset_id).await?;
        Ok(VoucherAsset::from(info))
    }
}
