//! Merchants sub-client.

use crate::auth::Role;
use crate::client::FoodPassClient;
use crate::domain::merchant::{MerchantDirectory, MerchantEntry};
use crate::error::SdkError;
use crate::shared::{is_plausible_address, AddressStr};

/// Sub-client for the merchant directory.
pub struct Merchants<'a> {
    pub(crate) client: &'a FoodPassClient,
}

impl<'a> Merchants<'a> {
    /// Add a merchant. Requires the `admin` effective role; duplicate
    /// addresses are rejected with [`SdkError::DuplicateMerchant`].
    pub async fn add(&self, address: &str, name: Option<&str>) -> Result<MerchantEntry, SdkError> {
        let ctx = self.client.auth_context().await;
        ctx.require(Role::Admin)?;

        let address = address.trim();
        if !is_plausible_address(address) {
            return Err(SdkError::InvalidParameters(
                "merchant address is not plausible".to_string(),
            ));
        }

        let address = AddressStr::from(address);
        let dir = self.directory();
        if dir.contains(&address)? {
            return Err(SdkError::DuplicateMerchant(address.to_string()));
        }

        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let entry = MerchantEntry {
            address,
            name: name.map(String::from),
        };
        dir.insert(entry.clone())?;
        tracing::info!(address = %entry.address, "merchant added");
        Ok(entry)
    }

    /// Remove a merchant by address. Requires the `admin` effective role.
    pub async fn remove(&self, address: &str) -> Result<(), SdkError> {
        let ctx = self.client.auth_context().await;
        ctx.require(Role::Admin)?;

        self.directory().remove(&AddressStr::from(address.trim()))?;
        Ok(())
    }

    /// The current directory, newest first. Open to any caller.
    pub fn list(&self) -> Result<Vec<MerchantEntry>, SdkError> {
        Ok(self.directory().list()?)
    }

    fn directory(&self) -> MerchantDirectory {
        MerchantDirectory::new(self.client.store.clone())
    }
}
