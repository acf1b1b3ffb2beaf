//! Resolution of the `etherscan` configuration section.
//!
//! Each field the user supplies replaces the default wholesale. Nothing is
//! merged: a per-network key mapping or a custom chain list from an earlier
//! resolution is dropped, not extended.

use super::ToolConfig;
use scanconf_sdk::config::{EtherscanConfig, EtherscanUserConfig, UserConfig};

/// Build the resolved Etherscan configuration from the user's section.
///
/// Missing fields fall back to the defaults: an empty API key and no
/// custom chains. Supplied fields are taken verbatim.
pub fn resolve_etherscan_config(user: Option<&EtherscanUserConfig>) -> EtherscanConfig {
    let Some(user) = user else {
        return EtherscanConfig::default();
    };

    EtherscanConfig {
        api_key: user.api_key.clone().unwrap_or_default(),
        custom_chains: user.custom_chains.clone().unwrap_or_default(),
    }
}

/// Resolve the user's `etherscan` section and install it on `config`.
///
/// Any previously resolved value is overwritten.
pub fn extend_etherscan_config(config: &mut ToolConfig, user: &UserConfig) {
    config.etherscan = Some(resolve_etherscan_config(user.etherscan.as_ref()));
}
