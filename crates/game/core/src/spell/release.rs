//! Release shapes.
//!
//! The release shape decides how a spell acquires targets and how many target
//! ids it reports when it is released. Shape parameters are authored with the
//! spell, so each shape is a data-carrying variant rather than a behavior.

/// Targeting pattern used when a spell is released.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReleaseTarget {
    /// Launches a projectile; aims at whatever is under the crosshair.
    Projectile,

    /// Single entity under the cursor.
    Cursor(CursorTarget),

    /// Every entity inside an area around the caster.
    Area(AreaShape),

    /// Every entity along a continuous beam.
    Beam,
}

impl ReleaseTarget {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Projectile => ShapeKind::Projectile,
            Self::Cursor(_) => ShapeKind::Cursor,
            Self::Area(_) => ShapeKind::Area,
            Self::Beam => ShapeKind::Beam,
        }
    }

    /// Returns true if this shape reports at most one target id.
    pub fn is_single_target(&self) -> bool {
        matches!(self, Self::Projectile | Self::Cursor(_))
    }

    pub fn is_beam(&self) -> bool {
        matches!(self, Self::Beam)
    }
}

/// Payload-free discriminant of [`ReleaseTarget`], used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ShapeKind {
    Projectile,
    Cursor,
    Area,
    Beam,
}

/// Cursor targeting options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorTarget {
    /// Target the caster when nothing is under the cursor (self-buffs).
    pub use_caster_as_fallback: bool,
}

/// Area of effect around the caster, scaled by the spell range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaShape {
    pub horizontal_range_multiplier: f32,
    pub vertical_range_multiplier: f32,
    /// Cone angle in degrees; `0` means a full sphere.
    pub angle_degrees: f32,
}

impl Default for AreaShape {
    fn default() -> Self {
        Self {
            horizontal_range_multiplier: 1.0,
            vertical_range_multiplier: 0.5,
            angle_degrees: 0.0,
        }
    }
}
