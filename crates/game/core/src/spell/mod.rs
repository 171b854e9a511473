//! Read-only spell definitions.
//!
//! A [`Spell`] is authored content: the casting core only reads it to decide
//! how targets are acquired ([`ReleaseTarget`]), whether the cast is channeled
//! ([`Channel`]) and whether the spell can be bound through the binding
//! service ([`Learn`]). Spell effects are not modeled here.

mod id;
mod release;

use core::cmp::Ordering;

pub use id::{RawSpellId, SpellId, SpellIdError};
pub use release::{AreaShape, CursorTarget, ReleaseTarget, ShapeKind};

/// A spell definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub id: SpellId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub school: MagicSchool,
    pub range: f32,
    pub release: ReleaseTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cast: CastTiming,
    /// Present for channeled spells.
    #[cfg_attr(feature = "serde", serde(default))]
    pub channel: Option<Channel>,
    /// Absent when the spell cannot be obtained through binding.
    #[cfg_attr(feature = "serde", serde(default))]
    pub learn: Option<Learn>,
}

impl Spell {
    pub fn new(id: SpellId, range: f32, release: ReleaseTarget) -> Self {
        Self {
            id,
            school: MagicSchool::default(),
            range,
            release,
            cast: CastTiming::default(),
            channel: None,
            learn: None,
        }
    }

    pub fn with_school(mut self, school: MagicSchool) -> Self {
        self.school = school;
        self
    }

    pub fn with_cast_duration(mut self, duration: u32) -> Self {
        self.cast.duration = duration;
        self
    }

    pub fn with_channel(mut self, ticks: u32) -> Self {
        self.channel = Some(Channel { ticks });
        self
    }

    pub fn with_learn(mut self, learn: Learn) -> Self {
        self.learn = Some(learn);
        self
    }

    pub fn is_channeled(&self) -> bool {
        self.channel.is_some()
    }

    /// Learn descriptor if the spell can be offered by the binding service.
    pub fn learnable(&self) -> Option<&Learn> {
        self.learn.as_ref().filter(|learn| learn.tier > 0)
    }
}

/// Ordering used when listing the spells of a pool: school, then tier, then
/// identifier.
pub fn display_order(a: &Spell, b: &Spell) -> Ordering {
    let tier = |spell: &Spell| spell.learn.as_ref().map_or(0, |learn| learn.tier);
    a.school
        .cmp(&b.school)
        .then_with(|| tier(a).cmp(&tier(b)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Magic school a spell belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MagicSchool {
    #[default]
    Arcane,
    Fire,
    Frost,
    Healing,
    Lightning,
    Soul,
    Physical,
}

/// Cast timing parameters consumed by a [`CastTimer`](crate::CastTimer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CastTiming {
    /// Ticks needed to reach full progress. `0` casts instantly.
    pub duration: u32,
}

/// Channel cadence: a channel tick is due every `ticks` ticks of use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    pub ticks: u32,
}

/// Binding cost parameters. Cost and level requirement scale with the tier
/// and saturate at `u32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Learn {
    pub tier: u32,
    pub level_cost_per_tier: u32,
    pub level_requirement_per_tier: u32,
}

impl Learn {
    pub fn new(tier: u32, level_cost_per_tier: u32, level_requirement_per_tier: u32) -> Self {
        Self {
            tier,
            level_cost_per_tier,
            level_requirement_per_tier,
        }
    }

    pub fn cost(&self) -> u32 {
        self.tier.saturating_mul(self.level_cost_per_tier)
    }

    pub fn level_requirement(&self) -> u32 {
        self.tier.saturating_mul(self.level_requirement_per_tier)
    }
}
