//! Spell identifiers.
//!
//! Spells are addressed by a namespaced identifier (`namespace:path`) in
//! content and by a registry-assigned [`RawSpellId`] on the wire.

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorSeverity, GameError};

/// Namespaced spell identifier, written `namespace:path`.
///
/// The namespace is optional when parsing and defaults to
/// [`SpellId::DEFAULT_NAMESPACE`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SpellId {
    namespace: String,
    path: String,
}

impl SpellId {
    pub const DEFAULT_NAMESPACE: &'static str = "spell_engine";

    /// Builds an identifier from its parts, validating both.
    pub fn new(namespace: &str, path: &str) -> Result<Self, SpellIdError> {
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(SpellIdError::InvalidNamespace(namespace.to_owned()));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(SpellIdError::InvalidPath(path.to_owned()));
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for SpellId {
    type Err = SpellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SpellIdError::Empty);
        }
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(Self::DEFAULT_NAMESPACE, s),
        }
    }
}

impl TryFrom<String> for SpellId {
    type Error = SpellIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpellId> for String {
    fn from(id: SpellId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Registry-assigned numeric spell id used in network messages.
///
/// Negative values are never assigned and always resolve to "unknown".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawSpellId(pub i32);

impl fmt::Display for RawSpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while parsing a [`SpellId`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellIdError {
    #[error("spell identifier is empty")]
    Empty,

    #[error("invalid namespace '{0}' in spell identifier")]
    InvalidNamespace(String),

    #[error("invalid path '{0}' in spell identifier")]
    InvalidPath(String),
}

impl GameError for SpellIdError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "SPELL_ID_EMPTY",
            Self::InvalidNamespace(_) => "SPELL_ID_INVALID_NAMESPACE",
            Self::InvalidPath(_) => "SPELL_ID_INVALID_PATH",
        }
    }
}
