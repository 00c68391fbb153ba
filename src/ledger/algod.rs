//! algod REST client — `AlgodHttp`.
//!
//! One method per endpoint, mapped onto [`LedgerClient`]. GET endpoints run
//! under [`RetryPolicy::Idempotent`]; the broadcast POST never retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::error::LedgerError;
use crate::ledger::retry::{is_retryable_status, Backoff, RetryPolicy};
use crate::ledger::{
    AssetHolding, AssetInfo, LedgerClient, PendingInfo, SignedBytes, SuggestedParams,
};
use crate::network::NetworkConfig;
use crate::shared::AddressStr;

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
    #[serde(rename = "txId", default)]
    tx_id: String,
}

#[derive(Debug, Deserialize)]
struct AccountAssetsResponse {
    #[serde(default)]
    assets: Vec<AssetHolding>,
}

/// HTTP client for the algod v2 REST API.
pub struct AlgodHttp {
    base_url: String,
    token: String,
    client: Client,
}

impl AlgodHttp {
    pub fn new(network: &NetworkConfig) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: network.algod_url.trim_end_matches('/').to_string(),
            token: network.algod_token.clone(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, LedgerError> {
        if retry == RetryPolicy::None {
            return self.do_get(url).await;
        }

        let backoff = Backoff::default();
        let mut last_error = None;

        for attempt in 0..=backoff.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        LedgerError::NodeError { status, .. } => is_retryable_status(*status),
                        LedgerError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < backoff.max_retries {
                        let delay = backoff.delay(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = backoff.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(LedgerError::MaxRetriesExceeded {
            attempts: backoff.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, LedgerError> {
        let mut req = self.client.get(url);
        if !self.token.is_empty() {
            req = req.header("X-Algo-API-Token", &self.token);
        }

        let resp = req.send().await?;
        Self::parse_response(resp).await
    }

    async fn parse_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, LedgerError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();
        match status_code {
            404 => Err(LedgerError::NotFound(body)),
            // Throttling is surfaced as a node error so the retry loop sees it.
            429 => Err(LedgerError::NodeError {
                status: status_code,
                body,
            }),
            400..=499 => Err(LedgerError::BadRequest(body)),
            _ => Err(LedgerError::NodeError {
                status: status_code,
                body,
            }),
        }
    }
}

#[async_trait]
impl LedgerClient for AlgodHttp {
    async fn suggested_params(&self) -> Result<SuggestedParams, LedgerError> {
        let url = format!("{}/v2/transactions/params", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    async fn send_raw_transaction(&self, blobs: &[SignedBytes]) -> Result<String, LedgerError> {
        let url = format!("{}/v2/transactions", self.base_url);

        // Signed blobs are submitted concatenated, as one binary body.
        let body: Vec<u8> = blobs.iter().flatten().copied().collect();

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-binary")
            .body(body);
        if !self.token.is_empty() {
            req = req.header("X-Algo-API-Token", &self.token);
        }

        // RetryPolicy::None by contract: a broadcast is never replayed.
        let resp = req.send().await?;
        let parsed: BroadcastResponse = Self::parse_response(resp).await?;
        Ok(parsed.tx_id)
    }

    async fn pending_info(&self, tx_id: &str) -> Result<PendingInfo, LedgerError> {
        let url = format!(
            "{}/v2/transactions/pending/{}?format=json",
            self.base_url, tx_id
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    async fn account_assets(&self, address: &AddressStr) -> Result<Vec<AssetHolding>, LedgerError> {
        let url = format!("{}/v2/accounts/{}/assets", self.base_url, address);
        let resp: AccountAssetsResponse = self.get(&url, RetryPolicy::Idempotent).await?;
        Ok(resp.assets)
    }

    async fn asset_info(&self, asset_id: u64) -> Result<AssetInfo, LedgerError> {
        let url = format!("{}/v2/assets/{}", self.base_url, asset_id);
        self.get(&url, RetryPolicy::Idempotent).await
    }
}
