use super::Caster;
use crate::spell::AreaShape;
use crate::state::EntityId;

/// World raycast and area queries, performed from the caster's eyes.
pub trait WorldQuery: Send + Sync {
    /// First entity hit by a ray of length `range`.
    fn target_from_raycast(&self, caster: &dyn Caster, range: f32) -> Option<EntityId>;

    /// Every entity along a ray of length `range`, nearest first.
    fn targets_from_raycast(&self, caster: &dyn Caster, range: f32) -> Vec<EntityId>;

    /// Every entity inside `area` scaled by `range`.
    fn targets_from_area(&self, caster: &dyn Caster, range: f32, area: &AreaShape)
    -> Vec<EntityId>;
}
