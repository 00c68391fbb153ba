//! Submission & confirmation pipeline.
//!
//! Broadcasts signed bytes, then polls the node until the transaction lands
//! in a confirmed round or the round budget runs out. The budget and the
//! polling interval are configuration, so tests run with near-zero values.
//!
//! A timeout here is a reporting failure only: the broadcast, once accepted,
//! proceeds on the ledger regardless, and the transaction may still confirm
//! after we stop watching. There is no reconciliation for that case.

use std::time::Duration;

use crate::error::LedgerError;
use crate::ledger::{LedgerClient, SignedBytes};

/// Bounds for the confirmation poll loop.
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    /// Maximum number of polling rounds before giving up.
    pub max_rounds: u32,
    /// Delay between polls.
    pub poll_interval: Duration,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Outcome of a confirmed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedTxn {
    pub tx_id: String,
    /// Round the transaction was finalized in.
    pub round: u64,
    /// Created-asset id, present when the transaction was an asset creation.
    pub asset_id: Option<u64>,
}

/// Broadcast `blobs` and poll until confirmed or the budget is exhausted.
///
/// Failure points, in order:
/// - [`LedgerError::SubmissionRejected`] — the node returned no transaction
///   id, or later reported a pool error for it;
/// - [`LedgerError::ConfirmationTimeout`] — budget exhausted while the
///   transaction was still pending (it may yet confirm).
///
/// Pending statuses in between are tolerated, not errors.
pub async fn submit_and_confirm(
    ledger: &dyn LedgerClient,
    blobs: &[SignedBytes],
    config: &ConfirmConfig,
) -> Result<ConfirmedTxn, LedgerError> {
    let tx_id = ledger.send_raw_transaction(blobs).await?;
    if tx_id.is_empty() {
        return Err(LedgerError::SubmissionRejected(
            "node returned no transaction id".to_string(),
        ));
    }
    tracing::debug!(tx_id = %tx_id, "transaction broadcast");

    for round in 0..config.max_rounds {
        let info = ledger.pending_info(&tx_id).await?;

        if !info.pool_error.is_empty() {
            return Err(LedgerError::SubmissionRejected(info.pool_error));
        }

        if let Some(confirmed_round) = info.confirmed() {
            tracing::info!(tx_id = %tx_id, round = confirmed_round, "transaction confirmed");
            return Ok(ConfirmedTxn {
                tx_id,
                round: confirmed_round,
                asset_id: info.asset_index,
            });
        }

        tracing::debug!(tx_id = %tx_id, poll = round + 1, "still pending");
        // No delay after the final poll; the timeout is reported immediately.
        if round + 1 < config.max_rounds {
            futures_timer::Delay::new(config.poll_interval).await;
        }
    }

    Err(LedgerError::ConfirmationTimeout {
        rounds: config.max_rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::ledger::{AssetHolding, AssetInfo, PendingInfo, SuggestedParams};
    use crate::shared::AddressStr;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Ledger stub that confirms after a fixed number of polls.
    struct PollingLedger {
        confirm_after: u32,
        asset_id: Option<u64>,
        polls: AtomicU32,
    }

    impl PollingLedger {
        fn new(confirm_after: u32, asset_id: Option<u64>) -> Self {
            Self {
                confirm_after,
                asset_id,
                polls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl crate::ledger::LedgerClient for PollingLedger {
        async fn suggested_params(&self) -> Result<SuggestedParams, LedgerError> {
            unimplemented!("not exercised")
        }

        async fn send_raw_transaction(
            &self,
            _blobs: &[SignedBytes],
        ) -> Result<String, LedgerError> {
            Ok("TXID123".to_string())
        }

        async fn pending_info(&self, _tx_id: &str) -> Result<PendingInfo, LedgerError> {
            let n = self.polls.fetch_add(1, Ordering::SeqCst);
            if n + 1 >= self.confirm_after {
                Ok(PendingInfo {
                    confirmed_round: Some(42),
                    asset_index: self.asset_id,
                    pool_error: String::new(),
                })
            } else {
                Ok(PendingInfo::default())
            }
        }

        async fn account_assets(
            &self,
            _address: &AddressStr,
        ) -> Result<Vec<AssetHolding>, LedgerError> {
            unimplemented!("not exercised")
        }

        async fn asset_info(&self, _asset_id: u64) -> Result<AssetInfo, LedgerError> {
            unimplemented!("not exercised")
        }
    }

    fn fast_config(max_rounds: u32) -> ConfirmConfig {
        ConfirmConfig {
            max_rounds,
            poll_interval: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_confirms_within_budget() {
        let ledger = PollingLedger::new(3, Some(99));
        let confirmed = submit_and_confirm(&ledger, &[vec![1, 2, 3]], &fast_config(10))
            .await
            .unwrap();
        assert_eq!(confirmed.tx_id, "TXID123");
        assert_eq!(confirmed.round, 42);
        assert_eq!(confirmed.asset_id, Some(99));
    }

    #[tokio::test]
    async fn test_times_out_after_budget_without_erroring_on_pending() {
        // Never confirms: every poll is a tolerated pending status.
        let ledger = PollingLedger::new(u32::MAX, None);
        let err = submit_and_confirm(&ledger, &[vec![1]], &fast_config(4))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::ConfirmationTimeout { rounds: 4 }
        ));
        assert_eq!(ledger.polls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_timeout_reported_without_trailing_delay() {
        // Two polls separated by one interval; no sleep after the last poll.
        let ledger = PollingLedger::new(u32::MAX, None);
        let config = ConfirmConfig {
            max_rounds: 2,
            poll_interval: Duration::from_millis(100),
        };
        let started = std::time::Instant::now();
        let err = submit_and_confirm(&ledger, &[vec![1]], &config)
            .await
            .unwrap_err();
        let elapsed = started.elapsed();
        assert!(matches!(err, LedgerError::ConfirmationTimeout { rounds: 2 }));
        assert_eq!(ledger.polls.load(Ordering::SeqCst), 2);
        assert!(
            elapsed < Duration::from_millis(190),
            "timed out after {elapsed:?}, expected a single interval"
        );
    }

    #[tokio::test]
    async fn test_timeout_message_is_not_definitive() {
        let err = LedgerError::ConfirmationTimeout { rounds: 10 };
        assert!(err.to_string().contains("may still confirm"));
    }

    struct RejectingLedger {
        empty_tx_id: bool,
    }

    #[async_trait]
    impl crate::ledger::LedgerClient for RejectingLedger {
        async fn suggested_params(&self) -> Result<SuggestedParams, LedgerError> {
            unimplemented!("not exercised")
        }

        async fn send_raw_transaction(
            &self,
            _blobs: &[SignedBytes],
        ) -> Result<String, LedgerError> {
            if self.empty_tx_id {
                Ok(String::new())
            } else {
                Ok("TXID".to_string())
            }
        }

        async fn pending_info(&self, _tx_id: &str) -> Result<PendingInfo, LedgerError> {
            Ok(PendingInfo {
                pool_error: "overspend".to_string(),
                ..PendingInfo::default()
            })
        }

        async fn account_assets(
            &self,
            _address: &AddressStr,
        ) -> Result<Vec<AssetHolding>, LedgerError> {
            unimplemented!("not exercised")
        }

        async fn asset_info(&self, _asset_id: u64) -> Result<AssetInfo, LedgerError> {
            unimplemented!("not exercised")
        }
    }

    #[tokio::test]
    async fn test_missing_tx_id_is_submission_rejected() {
        let ledger = RejectingLedger { empty_tx_id: true };
        let err = submit_and_confirm(&ledger, &[vec![1]], &fast_config(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::SubmissionRejected(_)));
    }

    #[tokio::test]
    async fn test_pool_error_is_submission_rejected() {
        let ledger = RejectingLedger { empty_tx_id: false };
        let err = submit_and_confirm(&ledger, &[vec![1]], &fast_config(3))
            .await
            .unwrap_err();
        match err {
            LedgerError::SubmissionRejected(msg) => assert_eq!(msg, "overspend"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
