//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `SpellIdError`, `OracleError`) are defined in their
//! respective modules alongside the data they validate.
//!
//! Casting and binding never fail at runtime: a cast that cannot proceed is a
//! no-op and a bind that cannot happen is an [`ApplyState`](crate::ApplyState).
//! Errors here cover malformed content, which is caught when it is loaded.

/// Severity level of an error, used to decide whether content can be fixed
/// and reloaded.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Unrecoverable errors indicating corrupted content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed spell identifier, pool referencing an unknown spell
    Validation,

    /// Fatal error - content is corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all errors raised by the spell crates.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Loaders report `error_code()` and `severity()` alongside the message
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
