//! Binding offers.
//!
//! A binding service offers the learnable spells of an item's pool. Its level
//! ceiling grows linearly with the library power around it; at
//! [`LIBRARY_POWER_CAP`] every learnable spell is offered.

use crate::env::SpellOracle;
use crate::spell::{RawSpellId, display_order};
use crate::state::ItemStack;

pub const LIBRARY_POWER_BASE: f32 = 10.0;
pub const LIBRARY_POWER_MULTIPLIER: f32 = 1.5;
pub const LIBRARY_POWER_CAP: u32 = 22;

/// A spell the binding service can bind onto an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingOffer {
    pub raw_id: RawSpellId,
    pub cost: u32,
    pub level_requirement: u32,
}

/// Whether a service with `library_power` may offer a spell requiring
/// `level_requirement`.
pub fn is_within_library_power(library_power: u32, level_requirement: u32) -> bool {
    library_power == LIBRARY_POWER_CAP
        || LIBRARY_POWER_BASE + library_power as f32 * LIBRARY_POWER_MULTIPLIER
            >= level_requirement as f32
}

/// Offers for `stack`, in pool display order.
///
/// Items without a container or whose pool is missing or empty get no offers.
/// Pool entries unknown to the registry, without a learn descriptor or with
/// tier `0` are skipped.
pub fn offers_for(
    stack: &ItemStack,
    library_power: u32,
    spells: &dyn SpellOracle,
) -> Vec<BindingOffer> {
    let Some(pool) = stack
        .spell_container()
        .and_then(|container| container.pool.as_ref())
        .and_then(|pool_id| spells.pool(pool_id))
    else {
        return Vec::new();
    };

    let mut learnable: Vec<_> = pool
        .spell_ids
        .iter()
        .filter_map(|id| spells.spell(id))
        .filter(|spell| spell.learnable().is_some())
        .collect();
    learnable.sort_by(|a, b| display_order(a, b));

    learnable
        .into_iter()
        .filter_map(|spell| {
            let learn = spell.learnable()?;
            Some(BindingOffer {
                raw_id: spells.raw_id(&spell.id)?,
                cost: learn.cost(),
                level_requirement: learn.level_requirement(),
            })
        })
        .filter(|offer| is_within_library_power(library_power, offer.level_requirement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::fixtures::{catalog, id, staff};
    use crate::env::{SpellCatalog, SpellOracle};
    use crate::spell::{Learn, MagicSchool, ReleaseTarget, Spell};
    use crate::state::{ItemHandle, PoolId, SpellContainer, SpellPool, StackHandle};

    fn offered_paths(stack: &ItemStack, power: u32) -> Vec<String> {
        let catalog = catalog();
        offers_for(stack, power, &catalog)
            .into_iter()
            .map(|offer| {
                catalog
                    .from_raw_id(offer.raw_id)
                    .unwrap()
                    .path()
                    .to_owned()
            })
            .collect()
    }

    #[test]
    fn cap_offers_every_learnable_spell_in_display_order() {
        let offered = offered_paths(&staff(&[], 3), LIBRARY_POWER_CAP);
        assert_eq!(
            offered,
            [
                "fire_blast",
                "fire_scorch",
                "fire_meteor",
                "fire_wall",
                "fire_storm",
                "frost_nova"
            ]
        );
    }

    #[test]
    fn cap_includes_requirements_beyond_the_linear_ceiling() {
        // The linear ceiling at the cap would be 10 + 1.5 * 22 = 43, below
        // fire_storm's 48.
        assert!(!is_within_library_power(LIBRARY_POWER_CAP - 1, 48));
        assert!(offered_paths(&staff(&[], 3), LIBRARY_POWER_CAP - 1)
            .iter()
            .all(|path| path != "fire_storm"));
        assert!(offered_paths(&staff(&[], 3), LIBRARY_POWER_CAP)
            .iter()
            .any(|path| path == "fire_storm"));
    }

    #[test]
    fn huge_tiers_saturate_instead_of_overflowing() {
        let colossus = Spell::new(id("colossus"), 16.0, ReleaseTarget::Projectile)
            .with_school(MagicSchool::Fire)
            .with_learn(Learn::new(70_000, 1, 70_000));
        let pool = SpellPool::new(PoolId::new("wizards:fire"), [colossus.id.clone()]);
        let catalog = SpellCatalog::from_parts([colossus], [pool]).unwrap();

        let offers = offers_for(&staff(&[], 3), LIBRARY_POWER_CAP, &catalog);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].cost, 70_000);
        assert_eq!(offers[0].level_requirement, u32::MAX);

        assert!(offers_for(&staff(&[], 3), LIBRARY_POWER_CAP - 1, &catalog).is_empty());
    }

    #[test]
    fn offers_carry_tier_scaled_cost_and_requirement() {
        let catalog = catalog();
        let offers = offers_for(&staff(&[], 3), LIBRARY_POWER_CAP, &catalog);
        let wall = offers
            .iter()
            .find(|offer| offer.raw_id == catalog.raw_id(&id("fire_wall")).unwrap())
            .unwrap();
        assert_eq!(wall.cost, 5);
        assert_eq!(wall.level_requirement, 30);
    }

    #[test]
    fn power_below_cap_limits_level_requirement() {
        // 10 + 1.5 * 2 = 13: requirements 6 and 12 pass.
        assert_eq!(
            offered_paths(&staff(&[], 3), 2),
            ["fire_blast", "frost_nova"]
        );
        // 10 + 1.5 * 21 = 41.5: everything but fire_storm passes below the cap.
        assert_eq!(offered_paths(&staff(&[], 3), 21).len(), 5);
        // 10 + 1.5 * 0 = 10: only the tier-1 spell.
        assert_eq!(offered_paths(&staff(&[], 3), 0), ["fire_blast"]);
    }

    #[test]
    fn inclusion_matches_linear_ceiling_for_every_power_below_cap() {
        for power in 0..LIBRARY_POWER_CAP {
            for requirement in 0..60 {
                let expected = 10.0 + 1.5 * power as f32 >= requirement as f32;
                assert_eq!(is_within_library_power(power, requirement), expected);
            }
        }
        assert!(is_within_library_power(LIBRARY_POWER_CAP, 10_000));
    }

    #[test]
    fn items_without_container_or_pool_get_nothing() {
        let catalog = catalog();
        let plain = ItemStack::new(StackHandle(5), ItemHandle(1));
        assert!(offers_for(&plain, LIBRARY_POWER_CAP, &catalog).is_empty());

        let no_pool = ItemStack::new(StackHandle(6), ItemHandle(1))
            .with_container(SpellContainer::new(3));
        assert!(offers_for(&no_pool, LIBRARY_POWER_CAP, &catalog).is_empty());

        let mut unknown_pool = staff(&[], 3);
        if let Some(container) = unknown_pool.container.as_mut() {
            container.pool = Some(crate::state::PoolId::new("wizards:missing"));
        }
        assert!(offers_for(&unknown_pool, LIBRARY_POWER_CAP, &catalog).is_empty());
    }
}
