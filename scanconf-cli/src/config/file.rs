//! TOML file configuration structures.
//!
//! These structs directly map to the `scanconf.toml` file format. Sections
//! other than `etherscan` belong to other tools and are ignored.

use scanconf_sdk::config::{CustomChain, EtherscanUserConfig, UserConfig};
use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etherscan: Option<EtherscanUserConfig>,
}

impl FileConfig {
    /// Custom chains declared in the file, in declaration order.
    pub fn custom_chains(&self) -> &[CustomChain] {
        self.etherscan
            .as_ref()
            .and_then(|etherscan| etherscan.custom_chains.as_deref())
            .unwrap_or_default()
    }

    /// Hand the file's sections over to the configuration pipeline.
    pub fn into_user_config(self) -> UserConfig {
        UserConfig {
            etherscan: self.etherscan,
        }
    }
}
