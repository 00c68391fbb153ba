//! External signer boundary.
//!
//! The signer is an out-of-process wallet holding the private keys. It gets
//! the fully-specified unsigned transactions and returns one signed blob —
//! or `None` — per transaction. A decline is terminal for the attempt:
//! nothing here retries, and signing has no timeout (a human may take
//! arbitrarily long to approve).

use async_trait::async_trait;

use crate::domain::mint::UnsignedTransaction;
use crate::error::SignerError;
use crate::ledger::SignedBytes;
use crate::shared::AddressStr;

/// A registered wallet the user can connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerHandle {
    /// Stable identifier (e.g. `"pera"`).
    pub id: String,
    /// Human-readable wallet name.
    pub name: String,
}

/// The external signer, as far as this SDK is concerned.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Wallets currently available for connection.
    async fn list_available(&self) -> Vec<SignerHandle>;

    /// Open a session with `handle`; returns the connected identity.
    async fn connect(&self, handle: &SignerHandle) -> Result<AddressStr, SignerError>;

    /// Close the session with `handle`.
    async fn disconnect(&self, handle: &SignerHandle);

    /// Sign each transaction. `None` in a slot means the wallet declined
    /// that specific transaction.
    async fn sign(
        &self,
        txns: &[UnsignedTransaction],
    ) -> Result<Vec<Option<SignedBytes>>, SignerError>;
}

/// Normalize a signer response: drop per-transaction declines, and fail
/// with [`SignerError::SigningDeclined`] when nothing was signed at all.
pub fn collect_signed(
    signed: Vec<Option<SignedBytes>>,
) -> Result<Vec<SignedBytes>, SignerError> {
    let blobs: Vec<SignedBytes> = signed.into_iter().flatten().collect();
    if blobs.is_empty() {
        return Err(SignerError::SigningDeclined);
    }
    Ok(blobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_signed_filters_declined_slots() {
        let blobs = collect_signed(vec![Some(vec![1]), None, Some(vec![2])]).unwrap();
        assert_eq!(blobs, vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_all_declined_is_signing_declined() {
        let err = collect_signed(vec![None, None]).unwrap_err();
        assert!(matches!(err, SignerError::SigningDeclined));
    }

    #[test]
    fn test_empty_batch_is_signing_declined() {
        assert!(matches!(
            collect_signed(vec![]),
            Err(SignerError::SigningDeclined)
        ));
    }
}
