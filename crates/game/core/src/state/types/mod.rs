pub mod common;
pub mod container;
pub mod item;

// Re-export common types
pub use common::{EntityId, Pose};

// Re-export container and pool types
pub use container::{PoolId, SpellContainer, SpellPool};

// Re-export item types
pub use item::{ItemHandle, ItemStack, StackHandle};
