//! Data-driven spell content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Spell catalogs and binding pools (data-driven via RON)
//! - Casting configuration (data-driven via TOML)
//! - Scripted casting scenarios for the harness (data-driven via RON)
//!
//! Content is consumed through game-core oracles and never appears in cast
//! session state.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, LoadResult, Scenario, ScenarioCaster,
    ScenarioEvent, ScenarioLoader, ScenarioWorld, SpellCatalogFile,
};
