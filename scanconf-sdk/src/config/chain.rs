//! Custom chain configuration.

use serde::{Deserialize, Serialize};

/// A user-declared network that the built-in network list does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomChain {
    /// Network name, as used for per-network API keys.
    pub network: String,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Explorer endpoints for this network.
    pub urls: ChainUrls,
}

/// Explorer endpoints of a custom chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainUrls {
    /// Endpoint of the explorer's HTTP API.
    #[serde(rename = "apiURL")]
    pub api_url: String,
    /// Human-facing explorer website.
    #[serde(rename = "browserURL")]
    pub browser_url: String,
}

impl CustomChain {
    /// Create a new CustomChain.
    pub fn new(
        network: impl Into<String>,
        chain_id: u64,
        api_url: impl Into<String>,
        browser_url: impl Into<String>,
    ) -> Self {
        Self {
            network: network.into(),
            chain_id,
            urls: ChainUrls {
                api_url: api_url.into(),
                browser_url: browser_url.into(),
            },
        }
    }
}
