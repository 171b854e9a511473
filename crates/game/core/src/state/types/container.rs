//! Spell containers and spell pools.

use std::fmt;

use crate::spell::SpellId;

/// Identifier of a [`SpellPool`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PoolId(pub String);

impl PoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spells bound to an item, in display and selection order.
///
/// `spell_ids.len() <= max_spell_count` is enforced when a spell is bound,
/// never retroactively: a container loaded over capacity is left as is and
/// simply reports [`is_full`](Self::is_full).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellContainer {
    pub spell_ids: Vec<SpellId>,
    pub max_spell_count: usize,
    /// Pool the binding service draws offers from; independent of the bound set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pool: Option<PoolId>,
}

impl SpellContainer {
    pub fn new(max_spell_count: usize) -> Self {
        Self {
            spell_ids: Vec::new(),
            max_spell_count,
            pool: None,
        }
    }

    pub fn with_spells(mut self, spell_ids: impl IntoIterator<Item = SpellId>) -> Self {
        self.spell_ids.extend(spell_ids);
        self
    }

    pub fn with_pool(mut self, pool: PoolId) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn len(&self) -> usize {
        self.spell_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spell_ids.is_empty()
    }

    pub fn contains(&self, id: &SpellId) -> bool {
        self.spell_ids.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.spell_ids.len() >= self.max_spell_count
    }

    /// Maps a free-running selection index onto the bound spells.
    ///
    /// The index wraps in both directions so scrolling past either end cycles
    /// through the container. An empty container always yields `0`.
    pub fn capped_index(&self, selected: i32) -> usize {
        if self.spell_ids.is_empty() {
            return 0;
        }
        selected.rem_euclid(self.spell_ids.len() as i32) as usize
    }

    /// Spell at the capped position of `selected`.
    pub fn spell_id_at(&self, selected: i32) -> Option<&SpellId> {
        self.spell_ids.get(self.capped_index(selected))
    }
}

/// Spells a binding service may offer for items referencing this pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellPool {
    pub id: PoolId,
    pub spell_ids: Vec<SpellId>,
}

impl SpellPool {
    /// Creates a pool, dropping repeated ids while keeping first occurrences.
    pub fn new(id: PoolId, spell_ids: impl IntoIterator<Item = SpellId>) -> Self {
        let mut distinct: Vec<SpellId> = Vec::new();
        for spell_id in spell_ids {
            if !distinct.contains(&spell_id) {
                distinct.push(spell_id);
            }
        }
        Self {
            id,
            spell_ids: distinct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spell_ids.is_empty()
    }
}
