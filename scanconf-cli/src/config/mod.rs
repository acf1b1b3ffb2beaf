//! Configuration loading for the scanconf CLI.
//!
//! Reads the TOML file, validates it, and runs the configuration pipeline
//! to produce the resolved tool configuration.

pub mod file;

use crate::config::file::FileConfig;
use clap::ValueEnum;
use scanconf_core::config::{ApiKeyValue, ConfigStore, CustomChain, ToolConfig};
use scanconf_core::extension::ConfigPipeline;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("failed to serialize config as JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Output format of the resolved configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Loaded configuration result.
pub struct LoadedConfig {
    pub tool: ToolConfig,
}

impl LoadedConfig {
    /// Publish the configuration into a store for read-only sharing.
    pub fn into_store(self) -> ConfigStore<ToolConfig> {
        ConfigStore::new(self.tool)
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    skip_validation: bool,
    pipeline: ConfigPipeline,
}

impl ConfigLoader {
    /// Create a new config loader using the built-in extenders.
    pub fn new(config_path: impl AsRef<Path>, skip_validation: bool) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            skip_validation,
            pipeline: ConfigPipeline::with_defaults(),
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Validate the configuration (unless skipped)
    /// 3. Run the configuration pipeline
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content)
    }

    /// Same as [`load`](Self::load), for configuration already in memory.
    pub fn load_str(&self, config_content: &str) -> Result<LoadedConfig, ConfigError> {
        let file_config: FileConfig = toml::from_str(config_content)?;

        if self.skip_validation {
            tracing::warn!("Skipping configuration validation");
        } else {
            self.validate(&file_config)?;
        }

        let user_config = file_config.into_user_config();
        let tool = self.pipeline.resolve(&user_config);
        Ok(LoadedConfig { tool })
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let Some(etherscan) = &config.etherscan else {
            return Ok(());
        };

        if let Some(ApiKeyValue::PerNetwork(keys)) = &etherscan.api_key {
            if keys.keys().any(|network| network.is_empty()) {
                return Err(ConfigError::ValidationError(
                    "apiKey mapping contains an empty network name".to_string(),
                ));
            }
        }

        let chains = config.custom_chains();
        for chain in chains {
            validate_custom_chain(chain)?;
        }
        warn_duplicate_chains(chains);
        Ok(())
    }
}

fn validate_custom_chain(chain: &CustomChain) -> Result<(), ConfigError> {
    if chain.network.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "custom chain with chainId {} has an empty network name",
            chain.chain_id
        )));
    }
    if chain.chain_id == 0 {
        return Err(ConfigError::ValidationError(format!(
            "custom chain {} has chainId 0",
            chain.network
        )));
    }
    validate_url(&chain.network, "apiURL", &chain.urls.api_url)?;
    validate_url(&chain.network, "browserURL", &chain.urls.browser_url)
}

fn validate_url(network: &str, field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| {
        ConfigError::ValidationError(format!(
            "custom chain {network} has an invalid {field} {value:?}: {e}"
        ))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::ValidationError(format!(
            "custom chain {network} has an unsupported {field} scheme {scheme:?}"
        ))),
    }
}

/// Duplicates are legal and kept as declared, but usually a mistake.
fn warn_duplicate_chains(chains: &[CustomChain]) {
    let mut networks = HashSet::new();
    let mut chain_ids = HashSet::new();
    for chain in chains {
        if !networks.insert(chain.network.as_str()) {
            tracing::warn!(network = %chain.network, "Custom chain network declared more than once");
        }
        if !chain_ids.insert(chain.chain_id) {
            tracing::warn!(chain_id = chain.chain_id, "Custom chain id declared more than once");
        }
    }
}

/// Render the resolved configuration in the requested format.
pub fn render(config: &ToolConfig, format: OutputFormat) -> Result<String, ConfigError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Toml => Ok(toml::to_string_pretty(config)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanconf_core::config::EtherscanConfig;

    fn loader() -> ConfigLoader {
        ConfigLoader::new("./scanconf.toml", false)
    }

    fn chain_toml(network: &str, chain_id: i64, api_url: &str) -> String {
        format!(
            r#"
[[etherscan.customChains]]
network = "{network}"
chainId = {chain_id}
urls = {{ apiURL = "{api_url}", browserURL = "https://explorer.example.com" }}
"#
        )
    }

    #[test]
    fn test_load_empty_file_installs_defaults() {
        let loaded = loader().load_str("").unwrap();
        assert_eq!(loaded.tool.etherscan, Some(EtherscanConfig::default()));
    }

    #[test]
    fn test_load_per_network_keys() {
        let toml_str = r#"
[etherscan.apiKey]
ropsten = "B"
sepolia = "C"
"#;
        let loaded = loader().load_str(toml_str).unwrap();
        let etherscan = loaded.tool.etherscan().unwrap();
        assert_eq!(etherscan.api_key.key_for("sepolia"), Some("C"));
        assert_eq!(etherscan.api_key.key_for("goerli"), None);
        assert!(etherscan.custom_chains.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("scanconf-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[etherscan]\napiKey = \"ABC\"\n").unwrap();

        let result = ConfigLoader::new(&path, false).load();
        std::fs::remove_file(&path).unwrap();

        let etherscan = result.unwrap().tool.etherscan.unwrap();
        assert_eq!(etherscan.api_key, ApiKeyValue::from("ABC"));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::new("/nonexistent/scanconf.toml", false).load();
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_rejects_zero_chain_id() {
        let toml_str = chain_toml("devnet", 0, "https://api.example.com");
        let result = loader().load_str(&toml_str);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_invalid_urls() {
        for api_url in ["not a url", "ftp://api.example.com"] {
            let toml_str = chain_toml("devnet", 1337, api_url);
            let result = loader().load_str(&toml_str);
            assert!(
                matches!(result, Err(ConfigError::ValidationError(_))),
                "{api_url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_network_names() {
        let toml_str = chain_toml("", 1337, "https://api.example.com");
        assert!(loader().load_str(&toml_str).is_err());

        let toml_str = "[etherscan.apiKey]\n\"\" = \"K\"\n";
        assert!(loader().load_str(toml_str).is_err());
    }

    #[test]
    fn test_skip_validation() {
        let toml_str = chain_toml("devnet", 0, "not a url");
        let loaded = ConfigLoader::new("./scanconf.toml", true)
            .load_str(&toml_str)
            .unwrap();
        assert_eq!(loaded.tool.etherscan().unwrap().custom_chains[0].chain_id, 0);
    }

    #[test]
    fn test_duplicates_are_accepted() {
        let toml_str = format!(
            "{}{}",
            chain_toml("devnet", 1337, "https://a.example.com"),
            chain_toml("devnet", 1337, "https://b.example.com"),
        );
        let loaded = loader().load_str(&toml_str).unwrap();
        let etherscan = loaded.tool.etherscan().unwrap();
        assert_eq!(etherscan.custom_chains.len(), 2);
        assert_eq!(
            etherscan.custom_chain("devnet").unwrap().urls.api_url,
            "https://b.example.com"
        );
    }

    #[test]
    fn test_render_json() {
        let loaded = loader().load_str("[etherscan]\napiKey = \"ABC\"\n").unwrap();
        let rendered = render(&loaded.tool, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "etherscan": { "apiKey": "ABC", "customChains": [] } })
        );
    }

    #[test]
    fn test_render_toml_round_trips_through_loader() {
        let toml_str = chain_toml("devnet", 1337, "https://api.example.com");
        let loaded = loader().load_str(&toml_str).unwrap();
        let rendered = render(&loaded.tool, OutputFormat::Toml).unwrap();

        let reloaded = loader().load_str(&rendered).unwrap();
        assert_eq!(reloaded.tool, loaded.tool);
    }

    #[test]
    fn test_into_store() {
        let store = loader().load_str("").unwrap().into_store();
        assert_eq!(store.version(), 0);
        assert!(store.snapshot().etherscan().is_some());
    }
}
