//! Network configuration for the FoodPass SDK.
//!
//! The SDK targets a single fixed network (Algorand TestNet). The genesis id
//! in the active [`NetworkConfig`] is compared against what the node reports
//! before any transaction is built; a mismatch refuses to operate rather
//! than silently minting on the wrong chain.

/// Default algod REST endpoint (AlgoNode public TestNet).
pub const TESTNET_ALGOD_URL: &str = "https://testnet-api.algonode.cloud";

/// Genesis id of the only supported network.
pub const TESTNET_GENESIS_ID: &str = "testnet-v1.0";

/// Block-explorer base URL for TestNet.
pub const TESTNET_EXPLORER_BASE: &str = "https://testnet.explorer.perawallet.app";

/// Fixed-target network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// algod REST base URL.
    pub algod_url: String,
    /// algod API token (`X-Algo-API-Token`); empty for public nodes.
    pub algod_token: String,
    /// Genesis id the node must report.
    pub genesis_id: String,
    /// Block-explorer base URL for building tx/asset links.
    pub explorer_base: String,
}

impl NetworkConfig {
    /// The TestNet defaults.
    pub fn testnet() -> Self {
        Self {
            algod_url: TESTNET_ALGOD_URL.to_string(),
            algod_token: String::new(),
            genesis_id: TESTNET_GENESIS_ID.to_string(),
            explorer_base: TESTNET_EXPLORER_BASE.to_string(),
        }
    }

    /// Explorer link for a transaction id.
    pub fn explorer_tx_url(&self, tx_id: &str) -> String {
        format!("{}/tx/{}", self.explorer_base, tx_id)
    }

    /// Explorer link for an asset id.
    pub fn explorer_asset_url(&self, asset_id: u64) -> String {
        format!("{}/asset/{}", self.explorer_base, asset_id)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_urls() {
        let cfg = NetworkConfig::testnet();
        assert_eq!(
            cfg.explorer_tx_url("TX123"),
            format!("{}/tx/TX123", TESTNET_EXPLORER_BASE)
        );
        assert_eq!(
            cfg.explorer_asset_url(7),
            format!("{}/asset/7", TESTNET_EXPLORER_BASE)
        );
    }
}
