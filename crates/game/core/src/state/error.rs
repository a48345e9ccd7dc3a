//! Game construction errors.

use crate::env::DocumentError;
use crate::error::{ErrorSeverity, GameError};

/// Invalid construction arguments.
///
/// Raised immediately at construction time and never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Rules were given neither as text nor as a document reference.
    #[error("provide either rules text or a rules document")]
    RulesSourceMissing,

    /// Rules were given both as text and as a document reference.
    #[error("provide either rules text or a rules document, but not both")]
    RulesSourceConflict,

    /// A team with this name is already registered.
    #[error("team '{name}' already exists")]
    DuplicateTeam { name: String },

    /// A participant had neither a deployment directive nor a biography document.
    #[error("participant requires a deployment directive or a biography document")]
    MissingBiography,

    /// The rules or biography document could not be read or written.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Document(inner) => inner.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RulesSourceMissing => "CONFIG_RULES_MISSING",
            Self::RulesSourceConflict => "CONFIG_RULES_CONFLICT",
            Self::DuplicateTeam { .. } => "CONFIG_DUPLICATE_TEAM",
            Self::MissingBiography => "CONFIG_MISSING_BIOGRAPHY",
            Self::Document(inner) => inner.error_code(),
        }
    }
}
