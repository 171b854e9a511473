use crate::state::{EntityId, ItemStack, Pose, StackHandle};

/// Host view of the casting entity and its inventory.
pub trait Caster {
    fn entity_id(&self) -> EntityId;

    /// Stack currently held in the main hand, if any.
    fn main_hand(&self) -> Option<&ItemStack>;

    /// Inventory slot holding exactly this stack (identity, not contents).
    fn inventory_slot_of(&self, stack: StackHandle) -> Option<usize>;

    /// Whether the host reports an item use in progress.
    fn is_using_item(&self) -> bool;

    fn pose(&self) -> Pose;
}

/// Read-only progression state consulted by the binding engine.
pub trait Progression {
    fn experience_level(&self) -> u32;

    /// Creative/unrestricted casters bypass every binding cost.
    fn is_creative(&self) -> bool;
}
