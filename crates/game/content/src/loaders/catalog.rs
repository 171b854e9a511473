//! Spell catalog loader.

use std::path::Path;

use game_core::{GameError, Spell, SpellCatalog, SpellPool};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Spell catalog structure for RON files.
///
/// Spells receive raw ids in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalogFile {
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub pools: Vec<SpellPool>,
}

/// Loader for spell catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a spell catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a SpellCatalogFile
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a spell catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let file: SpellCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        let pools = file
            .pools
            .into_iter()
            .map(|pool| SpellPool::new(pool.id, pool.spell_ids));
        let catalog = SpellCatalog::from_parts(file.spells, pools).map_err(|e| {
            let context = format!(
                "Invalid spell catalog ({} error {})",
                e.severity().as_str(),
                e.error_code()
            );
            anyhow::Error::new(e).context(context)
        })?;

        Ok(catalog)
    }
}
