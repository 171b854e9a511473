//! Client-side spell casting.
//!
//! Houses the per-caster cast state machine, target acquisition, outbound
//! packets with their wire codec, and the transport seam. Everything here is
//! driven synchronously from host callbacks; nothing blocks or spawns.
pub mod config;
pub mod message;
pub mod registry;
pub mod session;
pub mod targeting;
pub mod transport;

pub use config::ClientConfig;
pub use message::{
    Outbound, POSE_SYNC_CHANNEL, PoseSync, SPELL_REQUEST_CHANNEL, SpellCastAction, SpellRequest,
};
pub use registry::{CasterRegistry, UseEvent};
pub use session::{CastOutcome, CastSession};
pub use transport::{RecordingTransport, Transport, TransportError};
