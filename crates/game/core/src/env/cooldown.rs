//! Cooldown and ammo oracles.
//!
//! Both are advisory: a UI layer consults them to decide whether a use action
//! may start at all. The casting session never blocks on them.

use super::Caster;
use crate::spell::{Spell, SpellId};
use crate::state::{ItemHandle, ItemStack};

pub trait CooldownOracle: Send + Sync {
    fn is_cooling_down(&self, spell: &SpellId) -> bool;
}

pub trait AmmoOracle: Send + Sync {
    fn ammo_for(&self, caster: &dyn Caster, spell: &Spell, stack: &ItemStack) -> AmmoCheck;
}

/// Result of an ammo lookup for a (caster, spell, stack) triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmmoCheck {
    /// Item consumed by the spell, when it needs one.
    pub ammo: Option<ItemHandle>,
    satisfied: bool,
}

impl AmmoCheck {
    /// The spell needs no ammo.
    pub fn not_required() -> Self {
        Self {
            ammo: None,
            satisfied: true,
        }
    }

    pub fn required(ammo: ItemHandle, available: bool) -> Self {
        Self {
            ammo: Some(ammo),
            satisfied: available,
        }
    }

    pub fn satisfied(&self) -> bool {
        self.satisfied
    }
}
