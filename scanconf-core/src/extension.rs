//! Configuration extension pipeline.
//!
//! The host builds its configuration in one pass: it starts from a
//! `ToolConfig`, then lets every registered [`ConfigExtender`] fill in the
//! section it owns from the raw user configuration. Extenders run in
//! registration order, so a later extender sees the sections written by
//! earlier ones.

use crate::config::{ToolConfig, UserConfig, extend_etherscan_config};

/// A callback that populates one section of the shared configuration.
pub trait ConfigExtender: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Write this extender's section of `config` from `user`.
    fn extend(&self, config: &mut ToolConfig, user: &UserConfig);
}

/// Resolves the `etherscan` section.
#[derive(Debug, Clone, Copy, Default)]
pub struct EtherscanExtender;

impl ConfigExtender for EtherscanExtender {
    fn name(&self) -> &'static str {
        "etherscan"
    }

    fn extend(&self, config: &mut ToolConfig, user: &UserConfig) {
        extend_etherscan_config(config, user);
    }
}

/// Ordered list of configuration extenders.
#[derive(Default)]
pub struct ConfigPipeline {
    extenders: Vec<Box<dyn ConfigExtender>>,
}

impl ConfigPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with the built-in extenders registered.
    pub fn with_defaults() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(EtherscanExtender);
        pipeline
    }

    /// Append an extender. It runs after every extender registered before it.
    pub fn register(&mut self, extender: impl ConfigExtender + 'static) -> &mut Self {
        self.extenders.push(Box::new(extender));
        self
    }

    /// Names of the registered extenders, in run order.
    pub fn extender_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extenders.iter().map(|extender| extender.name())
    }

    /// Run every extender against an existing configuration.
    pub fn apply(&self, config: &mut ToolConfig, user: &UserConfig) {
        for extender in &self.extenders {
            tracing::debug!(extender = extender.name(), "Applying config extender");
            extender.extend(config, user);
        }
    }

    /// Run every extender against a fresh configuration.
    pub fn resolve(&self, user: &UserConfig) -> ToolConfig {
        let mut config = ToolConfig::default();
        self.apply(&mut config, user);
        config
    }
}
