//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::CastConfig;

/// Configuration required to bootstrap the casting client.
///
/// Paths left unset fall back to the content data directory.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Overrides `auto_release` from the loaded cast configuration.
    pub auto_release: Option<bool>,
    pub data_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub scenario_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `SPELL_AUTO_RELEASE` - Release fully charged casts immediately
    /// - `CONTENT_DATA_DIR` - Directory holding `config.toml`, `spells.ron` and `scenarios/`
    /// - `SPELL_CATALOG` - Spell catalog RON file
    /// - `SPELL_CONFIG` - Cast configuration TOML file
    /// - `SPELL_SCENARIO` - Scenario RON file
    pub fn from_env() -> Self {
        Self {
            auto_release: read_env_bool("SPELL_AUTO_RELEASE"),
            data_dir: read_env_path("CONTENT_DATA_DIR"),
            catalog_path: read_env_path("SPELL_CATALOG"),
            config_path: read_env_path("SPELL_CONFIG"),
            scenario_path: read_env_path("SPELL_SCENARIO"),
        }
    }

    /// Applies environment overrides on top of a loaded cast configuration.
    pub fn cast_config(&self, mut base: CastConfig) -> CastConfig {
        if let Some(auto_release) = self.auto_release {
            base.auto_release = auto_release;
        }
        base
    }
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
