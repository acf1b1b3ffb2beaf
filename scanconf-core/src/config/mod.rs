//! Runtime configuration for the verification integration.
//!
//! `ToolConfig` is the shared configuration object that extenders populate.
//! It is built once during configuration loading and then handed around
//! read-only, optionally through a [`ConfigStore`].

mod config_store;
mod etherscan;

pub use config_store::{ConfigStore, ConfigWatcher};
pub use etherscan::{extend_etherscan_config, resolve_etherscan_config};
pub use scanconf_sdk::config::{
    ApiKeyValue, ChainUrls, CustomChain, EtherscanConfig, EtherscanUserConfig, UserConfig,
};

use serde::Serialize;

/// The tool's shared configuration object.
///
/// Sections are `None` until the extender responsible for them has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolConfig {
    /// Resolved Etherscan configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etherscan: Option<EtherscanConfig>,
}

impl ToolConfig {
    /// Get the resolved Etherscan configuration, if it has been resolved.
    pub fn etherscan(&self) -> Option<&EtherscanConfig> {
        self.etherscan.as_ref()
    }
}
