//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use game_core::{CastConfig, SpellCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, Scenario, ScenarioLoader};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// └── scenarios/
///     ├── fire_blast.ron
///     └── beam_channel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load cast configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CastConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the spell catalog and pools from `spells.ron`.
    pub fn load_catalog(&self) -> LoadResult<SpellCatalog> {
        let path = self.data_dir.join("spells.ron");
        CatalogLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the scenario file (without `.ron` extension)
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
