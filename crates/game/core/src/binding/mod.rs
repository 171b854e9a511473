//! Spell binding: which spells a binding service offers for an item, and
//! whether a specific bind attempt is currently allowed.
//!
//! Everything here is a pure function of the item stack, the spell registry
//! and caller-supplied numbers. Nothing is persisted; applying a bind is the
//! host's job once [`BindingState::ready_to_apply`] says yes.

mod offer;
mod state;

pub use offer::{
    BindingOffer, LIBRARY_POWER_BASE, LIBRARY_POWER_CAP, LIBRARY_POWER_MULTIPLIER,
    is_within_library_power, offers_for,
};
pub use state::{ApplyState, BindingRequirements, BindingState};
