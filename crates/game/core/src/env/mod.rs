//! Traits describing the host collaborators the cores read from.
//!
//! Oracles expose spell definitions, world queries, cooldowns, ammo and cast
//! timing. The [`CastEnv`] aggregate bundles them so the casting session can
//! access everything it needs without hard coupling to concrete
//! implementations. [`SpellCatalog`] is an in-memory [`SpellOracle`] used by
//! content loaders and tests.
mod caster;
mod catalog;
mod cooldown;
mod error;
mod spells;
mod timing;
mod world;

pub use caster::{Caster, Progression};
pub use catalog::SpellCatalog;
pub use cooldown::{AmmoCheck, AmmoOracle, CooldownOracle};
pub use error::OracleError;
pub use spells::SpellOracle;
pub use timing::{CastTimer, LinearCastTimer};
pub use world::WorldQuery;

/// Aggregates the read-only collaborators required by a casting session.
#[derive(Clone, Copy)]
pub struct CastEnv<'a> {
    spells: &'a dyn SpellOracle,
    world: &'a dyn WorldQuery,
    cooldowns: &'a dyn CooldownOracle,
    ammo: &'a dyn AmmoOracle,
    timer: &'a dyn CastTimer,
}

impl<'a> CastEnv<'a> {
    pub fn new(
        spells: &'a dyn SpellOracle,
        world: &'a dyn WorldQuery,
        cooldowns: &'a dyn CooldownOracle,
        ammo: &'a dyn AmmoOracle,
        timer: &'a dyn CastTimer,
    ) -> Self {
        Self {
            spells,
            world,
            cooldowns,
            ammo,
            timer,
        }
    }

    pub fn spells(&self) -> &'a dyn SpellOracle {
        self.spells
    }

    pub fn world(&self) -> &'a dyn WorldQuery {
        self.world
    }

    pub fn cooldowns(&self) -> &'a dyn CooldownOracle {
        self.cooldowns
    }

    pub fn ammo(&self) -> &'a dyn AmmoOracle {
        self.ammo
    }

    pub fn timer(&self) -> &'a dyn CastTimer {
        self.timer
    }
}
