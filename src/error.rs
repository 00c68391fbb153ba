//! Unified SDK error types.
//!
//! Every failure surfaces as a distinct variant with a user-presentable
//! message. Nothing in the SDK retries a failed submission, signature, or
//! privileged action automatically — retry is always a fresh call.

use thiserror::Error;

use crate::auth::Role;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Caller input fails a precondition. Surfaced immediately, never retried.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The caller's effective role does not permit this action.
    #[error("Unauthorized: role '{required}' required, effective role is '{effective}'")]
    Unauthorized { required: Role, effective: Role },

    /// No wallet is connected, but the operation needs a signing identity.
    #[error("No wallet connected")]
    NotConnected,

    /// Merchant directory uniqueness violation — distinct from `Unauthorized`.
    #[error("Merchant already exists: {0}")]
    DuplicateMerchant(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Ledger-boundary errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Ledger node error {status}: {body}")]
    NodeError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },

    /// The network returned no transaction id (or rejected the pool entry).
    #[error("Transaction submission rejected: {0}")]
    SubmissionRejected(String),

    /// The confirmation poll budget ran out. The transaction may still
    /// confirm later — this is a reporting failure, not proof of failure.
    #[error(
        "No confirmation after {rounds} polling rounds; \
         the transaction may still confirm later"
    )]
    ConfirmationTimeout { rounds: u32 },

    /// Confirmation payload carried no created-asset id (protocol mismatch).
    #[error("Asset ID missing from confirmed transaction")]
    AssetIdMissing,

    /// The node reports a different network than this SDK is configured for.
    #[error("Wrong network: expected genesis '{expected}', node reports '{actual}'")]
    WrongNetwork { expected: String, actual: String },
}

/// Signer-boundary errors. Terminal for the attempt; the caller must
/// re-invoke the whole flow to retry.
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("No compatible signer available")]
    NoSignerAvailable,

    #[error("Signing declined by the wallet")]
    SigningDeclined,

    #[error("Signer connection failed: {0}")]
    ConnectFailed(String),
}

/// Key-value persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Corrupt stored value under '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}
