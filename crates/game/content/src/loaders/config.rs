//! Cast configuration loader.

use std::path::Path;

use game_core::CastConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for cast configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CastConfig
    ///
    /// # Returns
    ///
    /// Returns a CastConfig. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<CastConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse cast configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<CastConfig> {
        let config: CastConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
