//! Item and entity state read by the casting and binding cores.
//!
//! The host owns these values; the cores only read them. Containers are
//! bound to item stacks and are never resized by this crate.
pub mod types;

pub use types::{
    EntityId, ItemHandle, ItemStack, PoolId, Pose, SpellContainer, SpellPool, StackHandle,
};
