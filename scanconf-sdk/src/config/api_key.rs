//! API key configuration for the verification service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Credential material for the Etherscan API.
///
/// Either one key shared by every network, or a key per network name.
/// The shape the user picked is kept as-is; a single key is never expanded
/// into a mapping and a mapping is never collapsed into a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiKeyValue {
    /// One key used for all networks.
    Single(String),
    /// Keys indexed by network name.
    PerNetwork(BTreeMap<String, String>),
}

impl Default for ApiKeyValue {
    /// The "no key configured" sentinel: an empty single key.
    fn default() -> Self {
        ApiKeyValue::Single(String::new())
    }
}

impl ApiKeyValue {
    /// Look up the key to use when talking to the explorer of `network`.
    ///
    /// Empty keys are treated as missing.
    pub fn key_for(&self, network: &str) -> Option<&str> {
        let key = match self {
            ApiKeyValue::Single(key) => key.as_str(),
            ApiKeyValue::PerNetwork(keys) => keys.get(network)?.as_str(),
        };
        (!key.is_empty()).then_some(key)
    }

    /// Whether any key has been configured at all.
    pub fn is_configured(&self) -> bool {
        match self {
            ApiKeyValue::Single(key) => !key.is_empty(),
            ApiKeyValue::PerNetwork(keys) => !keys.is_empty(),
        }
    }
}

impl From<String> for ApiKeyValue {
    fn from(key: String) -> Self {
        ApiKeyValue::Single(key)
    }
}

impl From<&str> for ApiKeyValue {
    fn from(key: &str) -> Self {
        ApiKeyValue::Single(key.to_string())
    }
}

impl<K, V> FromIterator<(K, V)> for ApiKeyValue
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ApiKeyValue::PerNetwork(
            iter.into_iter()
                .map(|(network, key)| (network.into(), key.into()))
                .collect(),
        )
    }
}
