//! Scenario harness for the casting client.
//!
//! # Architecture
//!
//! ```text
//! ScenarioHost (scripted caster, world, cooldowns)
//!   └─→ Replay (drives CasterRegistry through use callbacks and ticks)
//!         ├─→ RecordingTransport (captures outbound intents)
//!         └─→ offers_for / BindingState (binding report for the held item)
//! ```
//!
//! The binary loads content, runs a [`Replay`] and prints the
//! [`ReplayReport`] as JSON.

mod host;
mod replay;

pub use host::ScenarioHost;
pub use replay::{IntentRecord, OfferRecord, Replay, ReplayReport};
