//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from game construction, oracles, document storage and the
//! human input bridge so clients can bubble them up with consistent context.
//! Every variant is fatal for the current run; a participant that cannot
//! produce an acceptable action is not an error but
//! [`crate::TurnOutcome::NoValidAction`].
use std::{fmt, io};

use thiserror::Error;
use wargame_core::{ConfigurationError, DocumentError, OracleError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("turn target {target:?} does not resolve to a participant of team {team:?}")]
    Resolution {
        team: Option<String>,
        target: String,
    },

    #[error("umpire could not produce a legal ruling for {activity:?} within {attempts} attempts")]
    LegalityExhausted { activity: String, attempts: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("{kind} input provider not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("failed to read human input")]
    Input(#[source] io::Error),

    #[error("failed to render game status")]
    Status(#[source] serde_json::Error),
}

impl RuntimeError {
    /// Stable identifier for logs and assertions.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "RUNTIME_CONFIGURATION",
            Self::Resolution { .. } => "RUNTIME_RESOLUTION",
            Self::LegalityExhausted { .. } => "RUNTIME_LEGALITY_EXHAUSTED",
            Self::Oracle(_) => "RUNTIME_ORACLE",
            Self::Document(_) => "RUNTIME_DOCUMENT",
            Self::ProviderNotSet { .. } => "RUNTIME_PROVIDER_NOT_SET",
            Self::Input(_) => "RUNTIME_INPUT",
            Self::Status(_) => "RUNTIME_STATUS",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Human,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Human => "human",
        };
        write!(f, "{}", label)
    }
}
