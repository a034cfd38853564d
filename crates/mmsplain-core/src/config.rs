//! Engine configuration.

use std::path::PathBuf;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory holding metadata JSON files; `None` uses the built-in
    /// code tables.
    pub metadata_dir: Option<PathBuf>,
    /// Whether plain-text output includes part payloads.
    pub include_body: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            metadata_dir: None,
            include_body: true,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration using the built-in code tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}

/// Builder for engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads code tables from JSON files in `dir`.
    #[must_use]
    pub fn metadata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.metadata_dir = Some(dir.into());
        self
    }

    /// Sets whether plain-text output includes part payloads.
    #[must_use]
    pub const fn include_body(mut self, include: bool) -> Self {
        self.config.include_body = include;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> EngineConfig {
        self.config
    }
}
