//! Common error infrastructure for wargame-core.
//!
//! Every error enum in this crate implements [`GameError`] so callers can
//! classify failures uniformly. Domain errors live next to the types they
//! guard (`ConfigurationError` beside [`crate::state::GameState`],
//! `OracleError` beside the oracle traits, and so on).
//!
//! The taxonomy mirrors how the umpire reacts to a failure:
//!
//! - **Validation**: bad construction input, raised immediately, never retried
//! - **Content**: an oracle produced something unusable for this turn
//! - **Fatal**: the run cannot continue and unwinds to the caller

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that must be fixed by the caller.
    ///
    /// Examples: rules supplied twice, duplicate team name
    Validation,

    /// Content produced by an external collaborator was malformed.
    ///
    /// Examples: unparsable dice spec, unknown resource modifier
    Content,

    /// Unrecoverable; the run aborts.
    ///
    /// Examples: document store unavailable, oracle backend failure
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Content => "content",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the error was caused by caller input.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all wargame-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to fix the problem, not by impact
/// - Keep `error_code` stable; it is used in logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
