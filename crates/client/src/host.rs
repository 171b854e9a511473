//! Scripted host built from a scenario.
//!
//! Stands in for the game: it owns the caster's inventory and answers world,
//! cooldown and ammo queries from the scenario's canned data.

use game_content::{Scenario, ScenarioCaster, ScenarioWorld};
use game_core::{
    AmmoCheck, AmmoOracle, AreaShape, Caster, CooldownOracle, EntityId, ItemStack, Pose,
    Progression, Spell, SpellId, StackHandle, WorldQuery,
};

pub struct ScenarioHost {
    caster: ScenarioCaster,
    inventory: Vec<ItemStack>,
    main_hand: Option<StackHandle>,
    world: ScenarioWorld,
    cooling_down: Vec<SpellId>,
    using: bool,
}

impl ScenarioHost {
    pub fn new(scenario: &Scenario) -> Self {
        Self {
            caster: scenario.caster.clone(),
            inventory: scenario.inventory.clone(),
            main_hand: scenario.main_hand,
            world: scenario.world.clone(),
            cooling_down: scenario.cooling_down.clone(),
            using: false,
        }
    }

    pub fn lapis(&self) -> u32 {
        self.caster.lapis
    }

    pub fn set_using(&mut self, using: bool) {
        self.using = using;
    }

    pub fn equip(&mut self, stack: StackHandle) {
        self.main_hand = Some(stack);
    }
}

impl Caster for ScenarioHost {
    fn entity_id(&self) -> EntityId {
        self.caster.entity
    }

    fn main_hand(&self) -> Option<&ItemStack> {
        let handle = self.main_hand?;
        self.inventory.iter().find(|stack| stack.handle == handle)
    }

    fn inventory_slot_of(&self, stack: StackHandle) -> Option<usize> {
        self.inventory.iter().position(|held| held.handle == stack)
    }

    fn is_using_item(&self) -> bool {
        self.using
    }

    fn pose(&self) -> Pose {
        self.caster.pose
    }
}

impl Progression for ScenarioHost {
    fn experience_level(&self) -> u32 {
        self.caster.level
    }

    fn is_creative(&self) -> bool {
        self.caster.creative
    }
}

impl WorldQuery for ScenarioHost {
    fn target_from_raycast(&self, _caster: &dyn Caster, _range: f32) -> Option<EntityId> {
        self.world.raycast
    }

    fn targets_from_raycast(&self, _caster: &dyn Caster, _range: f32) -> Vec<EntityId> {
        self.world.beam.clone()
    }

    fn targets_from_area(
        &self,
        _caster: &dyn Caster,
        _range: f32,
        _area: &AreaShape,
    ) -> Vec<EntityId> {
        self.world.area.clone()
    }
}

impl CooldownOracle for ScenarioHost {
    fn is_cooling_down(&self, spell: &SpellId) -> bool {
        self.cooling_down.contains(spell)
    }
}

impl AmmoOracle for ScenarioHost {
    fn ammo_for(&self, _caster: &dyn Caster, _spell: &Spell, _stack: &ItemStack) -> AmmoCheck {
        AmmoCheck::not_required()
    }
}
