//! Etherscan configuration, both as supplied by the user and as resolved.

use super::{ApiKeyValue, CustomChain};
use serde::{Deserialize, Serialize};

/// Resolved Etherscan configuration.
///
/// Every field is populated: an unset API key is represented by the empty
/// single key, and no custom chains by an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherscanConfig {
    pub api_key: ApiKeyValue,
    /// Custom chains, in the order the user declared them.
    pub custom_chains: Vec<CustomChain>,
}

impl EtherscanConfig {
    /// Find the custom chain declared for `network`.
    ///
    /// If the user declared the same network more than once, the last
    /// declaration wins.
    pub fn custom_chain(&self, network: &str) -> Option<&CustomChain> {
        self.custom_chains
            .iter()
            .rev()
            .find(|chain| chain.network == network)
    }
}

/// The `etherscan` section as written by the user. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EtherscanUserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKeyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_chains: Option<Vec<CustomChain>>,
}

/// Raw user configuration handed to configuration extenders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etherscan: Option<EtherscanUserConfig>,
}
