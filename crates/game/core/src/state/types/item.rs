//! Item-related state types.
//!
//! This module contains foundational item types:
//! - ItemHandle: Reference to item definitions
//! - StackHandle: Identity of one concrete stack
//! - ItemStack: A stack held by a caster, optionally carrying a spell container

use super::SpellContainer;

/// Reference to an item definition stored outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemHandle(pub u32);

/// Identity of a single stack instance.
///
/// Two stacks with equal contents are still different stacks; inventory
/// lookups compare handles, never contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StackHandle(pub u64);

/// An item stack as seen by the casting and binding cores.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub handle: StackHandle,
    pub item: ItemHandle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub container: Option<SpellContainer>,
}

impl ItemStack {
    pub fn new(handle: StackHandle, item: ItemHandle) -> Self {
        Self {
            handle,
            item,
            container: None,
        }
    }

    pub fn with_container(mut self, container: SpellContainer) -> Self {
        self.container = Some(container);
        self
    }

    pub fn spell_container(&self) -> Option<&SpellContainer> {
        self.container.as_ref()
    }
}
