//! Cast-time calculation.
//!
//! The casting session consumes progress through [`CastTimer`] and never
//! computes it itself, so hosts can plug in haste, easing or tick rounding.
//! [`LinearCastTimer`] is the reference implementation.

use super::Caster;
use crate::spell::Spell;

pub trait CastTimer: Send + Sync {
    /// Cast progress in `[0, 1]`; `1.0` means fully charged.
    fn progress(&self, caster: &dyn Caster, remaining_use_ticks: i32, spell: &Spell) -> f32;

    fn is_channeled(&self, spell: &Spell) -> bool {
        spell.is_channeled()
    }

    /// Whether a channel intent is due at this point of the use action.
    fn is_channel_tick_due(&self, spell: &Spell, remaining_use_ticks: i32) -> bool;
}

/// Linear progress over the spell's cast duration.
///
/// The host counts `remaining_use_ticks` down from `max_use_ticks` while the
/// item is used, so elapsed ticks are `max_use_ticks - remaining_use_ticks`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearCastTimer {
    pub max_use_ticks: i32,
}

impl LinearCastTimer {
    pub const DEFAULT_MAX_USE_TICKS: i32 = 72_000;

    pub fn new(max_use_ticks: i32) -> Self {
        Self { max_use_ticks }
    }

    pub fn elapsed(&self, remaining_use_ticks: i32) -> u32 {
        self.max_use_ticks.saturating_sub(remaining_use_ticks).max(0) as u32
    }
}

impl Default for LinearCastTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_USE_TICKS)
    }
}

impl CastTimer for LinearCastTimer {
    fn progress(&self, _caster: &dyn Caster, remaining_use_ticks: i32, spell: &Spell) -> f32 {
        let duration = spell.cast.duration;
        if duration == 0 {
            return 1.0;
        }
        (self.elapsed(remaining_use_ticks) as f32 / duration as f32).min(1.0)
    }

    fn is_channel_tick_due(&self, spell: &Spell, remaining_use_ticks: i32) -> bool {
        match spell.channel {
            Some(channel) if channel.ticks > 0 => {
                let elapsed = self.elapsed(remaining_use_ticks);
                elapsed > 0 && elapsed % channel.ticks == 0
            }
            _ => false,
        }
    }
}
