//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::mechanics::MechanicError;

/// Errors returned by oracle calls.
///
/// Oracles are trusted for content, so an error here means the oracle could
/// not answer at all (or answered outside its contract); the umpire never
/// retries these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The backing service could not be reached or refused the request.
    #[error("{oracle} oracle unavailable: {reason}")]
    Unavailable { oracle: &'static str, reason: String },

    /// The oracle answered but the answer did not fit its contract.
    #[error("{oracle} oracle returned a malformed answer: {reason}")]
    Malformed { oracle: &'static str, reason: String },

    /// Sub-mechanic parameters in a verdict could not be interpreted.
    #[error(transparent)]
    Mechanic(#[from] MechanicError),
}

impl OracleError {
    pub fn unavailable(oracle: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            oracle,
            reason: reason.into(),
        }
    }

    pub fn malformed(oracle: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            oracle,
            reason: reason.into(),
        }
    }
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unavailable { .. } => ErrorSeverity::Fatal,
            Self::Malformed { .. } | Self::Mechanic(_) => ErrorSeverity::Content,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "ORACLE_UNAVAILABLE",
            Self::Malformed { .. } => "ORACLE_MALFORMED",
            Self::Mechanic(inner) => inner.error_code(),
        }
    }
}
