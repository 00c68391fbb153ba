//! # FoodPass SDK
//!
//! A Rust SDK for the FoodPass voucher system: role-gated issuance and
//! redemption of non-fungible humanitarian-aid vouchers on Algorand TestNet.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared newtypes, errors, network constants
//! 2. **Boundaries** — trait seams for the ledger node, the external signer,
//!    and key-value persistence, plus a process-wide event bus
//! 3. **Ledger HTTP** — `AlgodHttp` with per-endpoint retry policies
//!    (feature `http`)
//! 4. **Domain** — vertical slices: mint, redemption, merchant, asset
//! 5. **High-Level Client** — `FoodPassClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use foodpass_sdk::prelude::*;
//!
//! let client = FoodPassClient::builder()
//!     .signer(my_wallet_adapter)
//!     .build()?;
//!
//! client.connect().await?;
//! client.roles().set(Role::Admin)?;
//!
//! let minted = client.minting().mint(&MintParams {
//!     issuer: "NGO Name".into(),
//!     campaign_id: "demo-campaign-001".into(),
//!     max_units: 30,
//!     expiry_date: "2026-12-31".into(),
//! }).await?;
//! println!("minted asset {} in tx {}", minted.asset_id, minted.tx_id);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the address validator.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Fixed-network configuration.
pub mod network;

// ── Layer 2: Boundaries ──────────────────────────────────────────────────────

/// Roles, entitlements, and the authorization context.
pub mod auth;

/// Process-wide change notifications.
pub mod events;

/// Key-value persistence boundary.
pub mod storage;

/// Ledger boundary: wire types, `LedgerClient`, confirmation pipeline.
pub mod ledger;

/// External signer boundary.
pub mod signer;

// ── Layer 3/4: Domain ────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, state, sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `FoodPassClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + validation
    pub use crate::shared::{is_plausible_address, AddressStr};

    // Roles and authorization
    pub use crate::auth::{entitlements_for, AuthContext, Role, RoleStore, DEMO_SUPER_WALLET};

    // Domain types — mint
    pub use crate::domain::mint::{
        MintParams, MintedAssetRef, MintedAssets, UnsignedTransaction, VoucherMetadata,
    };

    // Domain types — redemption, merchant, asset
    pub use crate::domain::asset::VoucherAsset;
    pub use crate::domain::merchant::MerchantEntry;
    pub use crate::domain::redemption::RedemptionRecord;

    // Boundaries
    pub use crate::ledger::confirm::{ConfirmConfig, ConfirmedTxn};
    pub use crate::ledger::{
        AssetHolding, AssetInfo, LedgerClient, PendingInfo, SignedBytes, SuggestedParams,
    };
    pub use crate::signer::{SignerHandle, TransactionSigner};
    pub use crate::storage::{KvStore, MemoryStore};

    // Events
    pub use crate::events::{EventBus, EventKind};

    // Errors
    pub use crate::error::{LedgerError, SdkError, SignerError, StorageError};

    // Network
    pub use crate::network::NetworkConfig;

    // Client + sub-clients
    pub use crate::client::{
        AssetsClient, FoodPassClient, FoodPassClientBuilder, MerchantsClient, MintingClient,
        RedemptionsClient,
    };
    pub use crate::ledger::retry::{Backoff, RetryPolicy};

    // Algod client
    #[cfg(feature = "http")]
    pub use crate::ledger::algod::AlgodHttp;
}
