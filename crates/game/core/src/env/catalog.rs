//! In-memory spell registry.
//!
//! Raw ids are assigned in registration order starting at `0`, so a catalog
//! built from the same content always yields the same wire ids.

use std::collections::BTreeMap;

use super::{OracleError, SpellOracle};
use crate::spell::{RawSpellId, Spell, SpellId};
use crate::state::{PoolId, SpellPool};

#[derive(Clone, Debug, Default)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
    index: BTreeMap<SpellId, usize>,
    pools: BTreeMap<PoolId, SpellPool>,
}

impl SpellCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from spells and pools. Pools may only reference
    /// spells from `spells`.
    pub fn from_parts(
        spells: impl IntoIterator<Item = Spell>,
        pools: impl IntoIterator<Item = SpellPool>,
    ) -> Result<Self, OracleError> {
        let mut catalog = Self::new();
        for spell in spells {
            catalog.insert_spell(spell)?;
        }
        for pool in pools {
            catalog.insert_pool(pool)?;
        }
        Ok(catalog)
    }

    pub fn insert_spell(&mut self, spell: Spell) -> Result<RawSpellId, OracleError> {
        if self.index.contains_key(&spell.id) {
            return Err(OracleError::DuplicateSpell(spell.id));
        }
        let position = self.spells.len();
        let raw = i32::try_from(position).map_err(|_| OracleError::RawIdExhausted)?;
        self.index.insert(spell.id.clone(), position);
        self.spells.push(spell);
        Ok(RawSpellId(raw))
    }

    pub fn insert_pool(&mut self, pool: SpellPool) -> Result<(), OracleError> {
        if self.pools.contains_key(&pool.id) {
            return Err(OracleError::DuplicatePool(pool.id));
        }
        if let Some(unknown) = pool.spell_ids.iter().find(|id| !self.index.contains_key(*id)) {
            return Err(OracleError::UnknownPoolSpell {
                pool: pool.id.clone(),
                spell: unknown.clone(),
            });
        }
        self.pools.insert(pool.id.clone(), pool);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellOracle for SpellCatalog {
    fn spell(&self, id: &SpellId) -> Option<&Spell> {
        self.index.get(id).map(|&position| &self.spells[position])
    }

    fn raw_id(&self, id: &SpellId) -> Option<RawSpellId> {
        self.index
            .get(id)
            .and_then(|&position| i32::try_from(position).ok())
            .map(RawSpellId)
    }

    fn from_raw_id(&self, raw: RawSpellId) -> Option<&SpellId> {
        let position = usize::try_from(raw.0).ok()?;
        self.spells.get(position).map(|spell| &spell.id)
    }

    fn pool(&self, id: &PoolId) -> Option<&SpellPool> {
        self.pools.get(id)
    }
}
