//! Spell data model, collaborator contracts and the spell binding engine.
//!
//! `game-core` defines the read-only spell definitions, the containers bound
//! to item stacks, and the traits through which a host exposes its world,
//! inventory, cooldowns and progression. The binding engine in [`binding`] is
//! pure: it computes offers and apply states without mutating anything, so it
//! can be called from any context. The client-side casting state machine
//! lives in `client-core` and builds on the types re-exported here.
pub mod binding;
pub mod config;
pub mod env;
pub mod error;
pub mod spell;
pub mod state;

pub use binding::{
    ApplyState, BindingOffer, BindingRequirements, BindingState, LIBRARY_POWER_BASE,
    LIBRARY_POWER_CAP, LIBRARY_POWER_MULTIPLIER, offers_for,
};
pub use config::CastConfig;
pub use env::{
    AmmoCheck, AmmoOracle, CastEnv, CastTimer, Caster, CooldownOracle, LinearCastTimer,
    OracleError, Progression, SpellCatalog, SpellOracle, WorldQuery,
};
pub use error::{ErrorSeverity, GameError};
pub use spell::{
    AreaShape, CastTiming, Channel, CursorTarget, Learn, MagicSchool, RawSpellId, ReleaseTarget,
    ShapeKind, Spell, SpellId, SpellIdError,
};
pub use state::{
    EntityId, ItemHandle, ItemStack, PoolId, Pose, SpellContainer, SpellPool, StackHandle,
};
