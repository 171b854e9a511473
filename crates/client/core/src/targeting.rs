//! Target acquisition for the spell being cast.
//!
//! Targets are recomputed from scratch on every sustain tick; nothing is
//! diffed against the previous result except the cursor fallback below.

use game_core::{Caster, EntityId, ReleaseTarget, Spell, WorldQuery};

/// Resolves the entities a cast of `spell` currently aims at.
///
/// `previous_first_target` is the first target acquired earlier in this
/// session. A cursor spell that falls back to the caster only does so when
/// the raycast misses and nothing was acquired before.
pub fn resolve(
    caster: &dyn Caster,
    spell: Option<&Spell>,
    previous_first_target: Option<EntityId>,
    world: &dyn WorldQuery,
) -> Vec<EntityId> {
    let Some(spell) = spell else {
        return Vec::new();
    };

    match &spell.release {
        ReleaseTarget::Area(area) => world.targets_from_area(caster, spell.range, area),
        ReleaseTarget::Beam => world.targets_from_raycast(caster, spell.range),
        ReleaseTarget::Projectile => world
            .target_from_raycast(caster, spell.range)
            .into_iter()
            .collect(),
        ReleaseTarget::Cursor(cursor) => match world.target_from_raycast(caster, spell.range) {
            Some(target) => vec![target],
            None if cursor.use_caster_as_fallback && previous_first_target.is_none() => {
                vec![caster.entity_id()]
            }
            None => Vec::new(),
        },
    }
}

/// Ids put on the wire for `targets`: single-target shapes send at most the
/// first acquired entity, area and beam shapes send all of them in order.
pub fn wire_targets<'t>(spell: &Spell, targets: &'t [EntityId]) -> &'t [EntityId] {
    if spell.release.is_single_target() {
        &targets[..targets.len().min(1)]
    } else {
        targets
    }
}
