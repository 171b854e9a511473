//! Content loaders for reading spell data from files.
//!
//! This module provides loaders that convert RON/TOML files into game-core
//! types and oracle implementations.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod scenario;

pub use catalog::{CatalogLoader, SpellCatalogFile};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use scenario::{Scenario, ScenarioCaster, ScenarioEvent, ScenarioLoader, ScenarioWorld};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
