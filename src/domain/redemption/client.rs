//! Redemptions sub-client.

use crate::auth::Role;
use crate::client::FoodPassClient;
use crate::domain::redemption::{RedemptionLog, RedemptionRecord};
use crate::error::SdkError;
use crate::shared::{is_plausible_address, AddressStr};

/// Sub-client for redemption recording and replay.
pub struct Redemptions<'a> {
    pub(crate) client: &'a FoodPassClient,
}

impl<'a> Redemptions<'a> {
    /// Record a redemption against `beneficiary`.
    ///
    /// Requires the `merchant` effective role; the connected identity is
    /// recorded as the merchant. `beneficiary` must be a plausible address
    /// and `amount` positive.
    pub async fn record(
        &self,
        beneficiary: &str,
        amount: u64,
        note: Option<&str>,
    ) -> Result<RedemptionRecord, SdkError> {
        let ctx = self.client.auth_context().await;
        ctx.require(Role::Merchant)?;
        let merchant = ctx.identity().cloned().ok_or(SdkError::NotConnected)?;

        let beneficiary = beneficiary.trim();
        if !is_plausible_address(beneficiary) {
            return Err(SdkError::InvalidParameters(
                "beneficiary address is not plausible".to_string(),
            ));
        }
        if amount == 0 {
            return Err(SdkError::InvalidParameters(
                "amount must be greater than zero".to_string(),
            ));
        }

        let note = note.map(str::trim).filter(|n| !n.is_empty());
        let record = RedemptionRecord::new(
            merchant,
            AddressStr::from(beneficiary),
            amount,
            note.map(String::from),
        );

        let record = self.log().append(record)?;
        tracing::info!(id = %record.id, amount, "redemption recorded");
        Ok(record)
    }

    /// All retained redemption records, newest first. Open to any caller.
    pub fn list(&self) -> Result<Vec<RedemptionRecord>, SdkError> {
        Ok(self.log().list()?)
    }

    fn log(&self) -> RedemptionLog {
        RedemptionLog::new(self.client.store.clone())
    }
}
