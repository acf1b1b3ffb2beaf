//! scanconf
//!
//! Resolves the Etherscan verification settings of a tool configuration file
//! and prints the result.

mod config;

use clap::Parser;
use config::{ConfigLoader, OutputFormat, render};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// scanconf - Etherscan verification config resolver
#[derive(Parser, Debug)]
#[command(name = "scanconf")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "SCANCONF_CONFIG", default_value = "./scanconf.toml")]
    config: PathBuf,

    /// Output format of the resolved configuration
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Resolve without validating custom chains and API keys
    #[arg(long, default_value = "false")]
    skip_validation: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::debug!("Starting scanconf v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = ConfigLoader::new(&args.config, args.skip_validation);
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!("Configuration loaded from {:?}", args.config);

    // Publish once, then only read
    let store = loaded_config.into_store();
    let snapshot = store.snapshot();

    if let Some(etherscan) = snapshot.etherscan() {
        if !etherscan.api_key.is_configured() {
            tracing::warn!("No Etherscan API key configured");
        }
        tracing::info!(
            custom_chains = etherscan.custom_chains.len(),
            "Etherscan configuration resolved"
        );
    }

    let output = render(&snapshot, args.format).map_err(|e| {
        tracing::error!("Failed to render configuration: {}", e);
        e
    })?;
    println!("{output}");

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so the rendered configuration on stdout can be piped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
