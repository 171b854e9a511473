//! Scenario loader.
//!
//! A scenario scripts one caster through a sequence of input events so the
//! harness can replay a casting session without a host game.

use std::path::Path;

use game_core::{EntityId, ItemStack, Pose, SpellId, StackHandle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// The scripted caster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioCaster {
    pub entity: EntityId,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub creative: bool,
    /// Lapis offered to the binding service.
    #[serde(default)]
    pub lapis: u32,
    #[serde(default)]
    pub pose: Pose,
}

/// Canned answers for world queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioWorld {
    /// Entity hit by single-target raycasts.
    #[serde(default)]
    pub raycast: Option<EntityId>,
    /// Entities along a beam, nearest first.
    #[serde(default)]
    pub beam: Vec<EntityId>,
    /// Entities inside any area query.
    #[serde(default)]
    pub area: Vec<EntityId>,
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioEvent {
    /// Set the selection index directly.
    Select(i32),
    /// Scroll the selection by a signed delta.
    Scroll(i32),
    /// Move a different stack into the main hand.
    Equip(StackHandle),
    /// Start using the held item.
    Begin,
    /// Keep using the held item for `ticks` client ticks.
    Hold { ticks: u32 },
    /// Stop using the held item.
    Release,
    /// Abort the current use without releasing.
    Interrupt,
}

/// A complete scripted casting session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub caster: ScenarioCaster,
    pub inventory: Vec<ItemStack>,
    #[serde(default)]
    pub main_hand: Option<StackHandle>,
    #[serde(default)]
    pub world: ScenarioWorld,
    #[serde(default)]
    pub cooling_down: Vec<SpellId>,
    #[serde(default)]
    pub library_power: u32,
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    /// Stack currently referenced by `main_hand`.
    pub fn main_hand_stack(&self) -> Option<&ItemStack> {
        let handle = self.main_hand?;
        self.inventory.iter().find(|stack| stack.handle == handle)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a Scenario
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text, checking that every referenced stack
    /// is in the inventory.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let referenced = scenario.main_hand.into_iter().chain(
            scenario.events.iter().filter_map(|event| match event {
                ScenarioEvent::Equip(handle) => Some(*handle),
                _ => None,
            }),
        );
        for handle in referenced {
            if !scenario.inventory.iter().any(|stack| stack.handle == handle) {
                anyhow::bail!("Scenario references stack {} missing from inventory", handle.0);
            }
        }

        Ok(scenario)
    }
}
