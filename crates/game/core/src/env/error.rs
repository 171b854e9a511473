//! Oracle content errors.
//!
//! Errors raised while assembling registry content. Lookups themselves never
//! fail: an unknown id is simply `None`.

use crate::error::{ErrorSeverity, GameError};
use crate::spell::SpellId;
use crate::state::PoolId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The same spell identifier was registered twice.
    #[error("spell '{0}' is already registered")]
    DuplicateSpell(SpellId),

    /// The same pool identifier was registered twice.
    #[error("spell pool '{0}' is already registered")]
    DuplicatePool(PoolId),

    /// A pool lists a spell that is not in the registry.
    #[error("spell pool '{pool}' references unknown spell '{spell}'")]
    UnknownPoolSpell { pool: PoolId, spell: SpellId },

    /// The registry ran out of numeric ids.
    #[error("raw spell id space exhausted")]
    RawIdExhausted,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            DuplicateSpell(_) | DuplicatePool(_) | UnknownPoolSpell { .. } => {
                ErrorSeverity::Validation
            }
            RawIdExhausted => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            DuplicateSpell(_) => "ORACLE_DUPLICATE_SPELL",
            DuplicatePool(_) => "ORACLE_DUPLICATE_POOL",
            UnknownPoolSpell { .. } => "ORACLE_UNKNOWN_POOL_SPELL",
            RawIdExhausted => "ORACLE_RAW_ID_EXHAUSTED",
        }
    }
}
