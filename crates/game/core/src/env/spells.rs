use crate::spell::{RawSpellId, Spell, SpellId};
use crate::state::{PoolId, SpellPool};

/// Spell registry: definitions, numeric ids and binding pools.
pub trait SpellOracle: Send + Sync {
    fn spell(&self, id: &SpellId) -> Option<&Spell>;

    fn raw_id(&self, id: &SpellId) -> Option<RawSpellId>;

    fn from_raw_id(&self, raw: RawSpellId) -> Option<&SpellId>;

    fn pool(&self, id: &PoolId) -> Option<&SpellPool>;
}
