//! Configuration types for the Etherscan verification integration.
//!
//! The user-facing types (`UserConfig`, `EtherscanUserConfig`) mirror what a
//! user writes in their configuration file: every field is optional. The
//! resolved type (`EtherscanConfig`) is what the rest of the tool consumes
//! after the resolver has filled in defaults.

mod api_key;
mod chain;
mod etherscan;

pub use api_key::ApiKeyValue;
pub use chain::{ChainUrls, CustomChain};
pub use etherscan::{EtherscanConfig, EtherscanUserConfig, UserConfig};
