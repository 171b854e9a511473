//! Outbound packets and their wire codec.
//!
//! Every cast transition produces exactly one [`SpellRequest`]. Beam casts
//! additionally stream the caster's [`Pose`] each tick so the authority can
//! follow the aim. Packets are encoded with bincode.

use game_core::{EntityId, Pose, RawSpellId};
use serde::{Deserialize, Serialize};

use crate::transport::TransportError;

/// Channel identifier of [`SpellRequest`] packets.
pub const SPELL_REQUEST_CHANNEL: &str = "spell_engine:spell_request";

/// Channel identifier of [`PoseSync`] packets.
pub const POSE_SYNC_CHANNEL: &str = "spell_engine:pose_sync";

/// Phase of a cast announced to the authority.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellCastAction {
    Start,
    Channel,
    Release,
}

/// Cast intent sent to the authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRequest {
    pub action: SpellCastAction,
    /// Raw registry id of the spell.
    pub spell_id: i32,
    /// Inventory slot of the used stack, `-1` when it is not in the inventory.
    pub slot: i32,
    pub remaining_use_ticks: i32,
    pub target_ids: Vec<u32>,
}

impl SpellRequest {
    pub fn new(
        action: SpellCastAction,
        spell_id: RawSpellId,
        slot: i32,
        remaining_use_ticks: i32,
        targets: &[EntityId],
    ) -> Self {
        Self {
            action,
            spell_id: spell_id.0,
            slot,
            remaining_use_ticks,
            target_ids: targets.iter().map(|target| target.0).collect(),
        }
    }
}

/// Full position and orientation of a beaming caster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseSync {
    pub entity: EntityId,
    pub pose: Pose,
}

/// Any packet the casting core hands to a [`Transport`](crate::Transport).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outbound {
    SpellRequest(SpellRequest),
    PoseSync(PoseSync),
}

impl Outbound {
    /// Stable channel identifier the packet is sent on.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::SpellRequest(_) => SPELL_REQUEST_CHANNEL,
            Self::PoseSync(_) => POSE_SYNC_CHANNEL,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, TransportError> {
        bincode::serialize(self).map_err(|e| TransportError::Codec(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TransportError> {
        bincode::deserialize(bytes).map_err(|e| TransportError::Codec(e.to_string()))
    }

    pub fn as_spell_request(&self) -> Option<&SpellRequest> {
        match self {
            Self::SpellRequest(request) => Some(request),
            Self::PoseSync(_) => None,
        }
    }
}

impl From<SpellRequest> for Outbound {
    fn from(request: SpellRequest) -> Self {
        Self::SpellRequest(request)
    }
}

impl From<PoseSync> for Outbound {
    fn from(sync: PoseSync) -> Self {
        Self::PoseSync(sync)
    }
}
