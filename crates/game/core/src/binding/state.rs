//! Binding eligibility.

use crate::env::{Progression, SpellOracle};
use crate::spell::{RawSpellId, SpellId};
use crate::state::ItemStack;

/// Eligibility of binding a specific spell onto a specific item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplyState {
    AlreadyApplied,
    NoMoreSlot,
    Applicable,
    Invalid,
}

/// Costs of a bind attempt.
///
/// Lapis and level costs are numerically equal but checked against
/// different resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingRequirements {
    pub lapis_cost: u32,
    pub level_cost: u32,
    pub required_level: u32,
}

impl BindingRequirements {
    pub fn new(cost: u32, required_level: u32) -> Self {
        Self {
            lapis_cost: cost,
            level_cost: cost,
            required_level,
        }
    }

    /// Creative players bypass every check.
    pub fn satisfied_for(&self, player: &dyn Progression, lapis_count: u32) -> bool {
        player.is_creative()
            || (self.met_required_level(player)
                && self.has_enough_lapis(lapis_count)
                && self.has_enough_levels_to_spend(player))
    }

    pub fn met_required_level(&self, player: &dyn Progression) -> bool {
        player.experience_level() >= self.required_level
    }

    pub fn has_enough_lapis(&self, lapis_count: u32) -> bool {
        lapis_count >= self.lapis_cost
    }

    pub fn has_enough_levels_to_spend(&self, player: &dyn Progression) -> bool {
        player.experience_level() >= self.level_cost
    }
}

/// Apply state of a bind attempt together with its requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingState {
    pub apply_state: ApplyState,
    /// `None` only when the spell id itself could not be resolved.
    pub requirements: Option<BindingRequirements>,
}

impl BindingState {
    pub fn new(apply_state: ApplyState, requirements: Option<BindingRequirements>) -> Self {
        Self {
            apply_state,
            requirements,
        }
    }

    /// Evaluates a bind attempt addressed by raw (wire) spell id.
    pub fn from_raw_id(
        raw_id: RawSpellId,
        stack: &ItemStack,
        cost: u32,
        required_level: u32,
        spells: &dyn SpellOracle,
    ) -> Self {
        match spells.from_raw_id(raw_id) {
            Some(spell_id) => Self::of(spell_id, stack, cost, required_level),
            None => Self::new(ApplyState::Invalid, None),
        }
    }

    /// Evaluates a bind attempt addressed by spell identifier.
    pub fn of(spell_id: &SpellId, stack: &ItemStack, cost: u32, required_level: u32) -> Self {
        let requirements = Some(BindingRequirements::new(cost, required_level));
        let apply_state = match stack.spell_container() {
            None => ApplyState::Invalid,
            Some(container) if container.contains(spell_id) => ApplyState::AlreadyApplied,
            Some(container) if container.is_full() => ApplyState::NoMoreSlot,
            Some(_) => ApplyState::Applicable,
        };
        Self::new(apply_state, requirements)
    }

    pub fn ready_to_apply(&self, player: &dyn Progression, lapis_count: u32) -> bool {
        self.apply_state == ApplyState::Applicable
            && self
                .requirements
                .is_some_and(|requirements| requirements.satisfied_for(player, lapis_count))
    }
}
