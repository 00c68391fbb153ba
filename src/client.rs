//! High-level client — `FoodPassClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the shared boundary handles, and the wallet
//! session.

use std::sync::Arc;

use async_lock::RwLock;

use crate::auth::{AuthContext, Role, RoleStore};
use crate::domain::asset::client::Assets;
use crate::domain::merchant::client::Merchants;
use crate::domain::mint::client::Minting;
use crate::domain::redemption::client::Redemptions;
use crate::error::{SdkError, SignerError};
use crate::events::EventBus;
use crate::ledger::confirm::ConfirmConfig;
use crate::ledger::LedgerClient;
use crate::network::NetworkConfig;
use crate::shared::AddressStr;
use crate::signer::{SignerHandle, TransactionSigner};
use crate::storage::{KvStore, MemoryStore};

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::merchant::client::Merchants as MerchantsClient;
pub use crate::domain::mint::client::Minting as MintingClient;
pub use crate::domain::redemption::client::Redemptions as RedemptionsClient;

/// An open wallet session.
#[derive(Debug, Clone)]
struct ActiveSession {
    handle: SignerHandle,
    identity: AddressStr,
}

/// The primary entry point for the FoodPass SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.minting()`, `client.redemptions()`, etc. All privileged
/// operations re-derive their authorization from the current session and
/// the persisted role on every call.
pub struct FoodPassClient {
    pub(crate) ledger: Arc<dyn LedgerClient>,
    pub(crate) signer: Arc<dyn TransactionSigner>,
    pub(crate) store: Arc<dyn KvStore>,
    pub(crate) bus: Arc<EventBus>,
    pub(crate) network: NetworkConfig,
    pub(crate) confirm: ConfirmConfig,
    session: Arc<RwLock<Option<ActiveSession>>>,
}

impl FoodPassClient {
    pub fn builder() -> FoodPassClientBuilder {
        FoodPassClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn minting(&self) -> Minting<'_> {
        Minting { client: self }
    }

    pub fn redemptions(&self) -> Redemptions<'_> {
        Redemptions { client: self }
    }

    pub fn merchants(&self) -> Merchants<'_> {
        Merchants { client: self }
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    /// The persisted active-role selection.
    pub fn roles(&self) -> RoleStore {
        RoleStore::new(self.store.clone(), self.bus.clone())
    }

    /// The change-notification bus (`role-changed`, `assets-changed`).
    pub fn events(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// The active network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    // ── Wallet session ───────────────────────────────────────────────────

    /// Connect to the first available signer; returns the identity.
    ///
    /// Fails with [`SignerError::NoSignerAvailable`] when no compatible
    /// wallet is registered.
    pub async fn connect(&self) -> Result<AddressStr, SdkError> {
        let handles = self.signer.list_available().await;
        let handle = handles
            .into_iter()
            .next()
            .ok_or(SdkError::Signer(SignerError::NoSignerAvailable))?;

        let identity = self.signer.connect(&handle).await?;
        tracing::info!(wallet = %handle.name, identity = %identity, "wallet connected");
        *self.session.write().await = Some(ActiveSession {
            handle,
            identity: identity.clone(),
        });

        // Entitlements changed with the identity; drop any role the new
        // identity cannot hold.
        self.auth_context().await.effective_role()?;
        Ok(identity)
    }

    /// Close the wallet session and reset the active role to `public`.
    pub async fn disconnect(&self) -> Result<(), SdkError> {
        if let Some(session) = self.session.write().await.take() {
            self.signer.disconnect(&session.handle).await;
            tracing::info!(wallet = %session.handle.name, "wallet disconnected");
        }
        self.roles().set(Role::Public)?;
        Ok(())
    }

    /// The connected identity, if any.
    pub async fn active_address(&self) -> Option<AddressStr> {
        self.session.read().await.as_ref().map(|s| s.identity.clone())
    }

    /// Authorization context for one operation, bound to the current
    /// session. Built per call — never cached.
    pub async fn auth_context(&self) -> AuthContext {
        AuthContext::new(self.active_address().await, self.roles())
    }
}

impl Clone for FoodPassClient {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            signer: self.signer.clone(),
            store: self.store.clone(),
            bus: self.bus.clone(),
            network: self.network.clone(),
            confirm: self.confirm.clone(),
            session: self.session.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct FoodPassClientBuilder {
    network: Option<NetworkConfig>,
    confirm: Option<ConfirmConfig>,
    ledger: Option<Arc<dyn LedgerClient>>,
    signer: Option<Arc<dyn TransactionSigner>>,
    store: Option<Arc<dyn KvStore>>,
}

impl FoodPassClientBuilder {
    /// Override the network configuration (default: TestNet).
    pub fn network(mut self, network: NetworkConfig) -> Self {
        self.network = Some(network);
        self
    }

    /// Override the confirmation poll bounds (default: 10 rounds, 1s).
    pub fn confirm(mut self, confirm: ConfirmConfig) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Provide a ledger client. Without the `http` feature this is required.
    pub fn ledger(mut self, ledger: Arc<dyn LedgerClient>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Provide the external signer boundary.
    pub fn signer(mut self, signer: Arc<dyn TransactionSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Provide the key-value persistence backend (default: in-memory).
    pub fn store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<FoodPassClient, SdkError> {
        let network = self.network.unwrap_or_default();

        #[cfg(feature = "http")]
        let ledger = match self.ledger {
            Some(l) => l,
            None => Arc::new(crate::ledger::algod::AlgodHttp::new(&network)),
        };
        #[cfg(not(feature = "http"))]
        let ledger = self.ledger.ok_or_else(|| {
            SdkError::InvalidParameters(
                "a ledger client is required without the `http` feature".to_string(),
            )
        })?;

        let signer = self.signer.ok_or_else(|| {
            SdkError::InvalidParameters("a transaction signer is required".to_string())
        })?;

        Ok(FoodPassClient {
            ledger,
            signer,
            store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
            bus: Arc::new(EventBus::new()),
            network,
            confirm: self.confirm.unwrap_or_default(),
            session: Arc::new(RwLock::new(None)),
        })
    }
}
