//! Minting sub-client — the full issue pipeline.

use crate::auth::Role;
use crate::client::FoodPassClient;
use crate::domain::mint::{build_mint_txn, MintParams, MintedAssetRef, MintedAssets};
use crate::error::{LedgerError, SdkError};
use crate::ledger::confirm::submit_and_confirm;
use crate::signer::collect_signed;

/// Sub-client for voucher minting.
pub struct Minting<'a> {
    pub(crate) client: &'a FoodPassClient,
}

impl<'a> Minting<'a> {
    /// Mint one voucher: authorize, build, sign, broadcast, confirm.
    ///
    /// Requires the `admin` effective role and a connected wallet. Any
    /// failure is terminal for this attempt — re-invoke to retry. A
    /// [`LedgerError::ConfirmationTimeout`] does NOT mean the mint failed;
    /// the asset may still appear on the ledger.
    pub async fn mint(&self, params: &MintParams) -> Result<MintedAssetRef, SdkError> {
        let ctx = self.client.auth_context().await;
        ctx.require(Role::Admin)?;
        let creator = ctx.identity().cloned().ok_or(SdkError::NotConnected)?;

        let sp = self
            .client
            .ledger
            .suggested_params()
            .await
            .map_err(SdkError::from)?;
        if sp.genesis_id != self.client.network.genesis_id {
            return Err(LedgerError::WrongNetwork {
                expected: self.client.network.genesis_id.clone(),
                actual: sp.genesis_id,
            }
            .into());
        }

        let txn = build_mint_txn(params, &creator, &sp)?;

        let responses = self
            .client
            .signer
            .sign(std::slice::from_ref(&txn))
            .await
            .map_err(SdkError::from)?;
        let blobs = collect_signed(responses).map_err(SdkError::from)?;

        let confirmed = submit_and_confirm(
            self.client.ledger.as_ref(),
            &blobs,
            &self.client.confirm,
        )
        .await
        .map_err(SdkError::from)?;

        // Protocol/version mismatch if absent; fatal for this attempt.
        let asset_id = confirmed
            .asset_id
            .ok_or(SdkError::Ledger(LedgerError::AssetIdMissing))?;

        self.minted().push(asset_id)?;
        tracing::info!(
            asset_id,
            tx_id = %confirmed.tx_id,
            campaign = %params.campaign_id,
            "voucher minted"
        );

        Ok(MintedAssetRef {
            asset_id,
            tx_id: confirmed.tx_id,
        })
    }

    /// Recently minted asset ids, newest first (advisory local cache).
    pub fn recent(&self) -> Result<Vec<u64>, SdkError> {
        Ok(self.minted().list()?)
    }

    fn minted(&self) -> MintedAssets {
        MintedAssets::new(self.client.store.clone(), self.client.bus.clone())
    }
}
