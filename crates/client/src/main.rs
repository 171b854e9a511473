//! Spell casting client harness.
//!
//! Loads content, replays a scripted casting scenario through the casting
//! core and prints the outbound intents and binding offers as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Replay the default scenario from crates/game/content/data
//! cargo run -p spell-client
//!
//! # Replay a named scenario with auto-release and debug logs
//! SPELL_AUTO_RELEASE=1 RUST_LOG=debug cargo run -p spell-client -- beam_channel
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use client_core::ClientConfig;
use game_content::{CatalogLoader, ConfigLoader, ContentFactory, ScenarioLoader};
use spell_client::Replay;

const DEFAULT_DATA_DIR: &str = "crates/game/content/data";
const DEFAULT_SCENARIO: &str = "fire_blast";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();
    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let factory = ContentFactory::new(&data_dir);
    tracing::info!("Content data directory: {}", data_dir.display());

    // 2. Load content (explicit paths win over the data directory)
    let cast_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path),
        None => factory.load_config(),
    }
    .context("Failed to load cast configuration")?;
    let cast_config = config.cast_config(cast_config);

    let catalog = match &config.catalog_path {
        Some(path) => CatalogLoader::load(path),
        None => factory.load_catalog(),
    }
    .context("Failed to load spell catalog")?;
    tracing::info!("Loaded {} spells", catalog.len());

    let scenario = match &config.scenario_path {
        Some(path) => ScenarioLoader::load(path),
        None => {
            let name = std::env::args()
                .nth(1)
                .unwrap_or_else(|| DEFAULT_SCENARIO.to_string());
            factory.load_scenario(&name)
        }
    }
    .context("Failed to load scenario")?;

    // 3. Replay and report
    tracing::info!("Auto release: {}", cast_config.auto_release);
    let report = Replay::new(&catalog, cast_config).run(&scenario);
    tracing::info!(
        "Replay finished after {} ticks: {} intents, {} offers",
        report.ticks,
        report.intents.len(),
        report.offers.len()
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write report")?;
    writeln!(stdout)?;

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
