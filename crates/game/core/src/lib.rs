//! Game model for turn-based matrix wargames.
//!
//! `wargame-core` defines the data the umpire works on (game state, round
//! plan, participants, resource ledger, action log, deck), the randomized
//! sub-mechanics, and the oracle traits through which external judgment is
//! consulted. It performs no I/O; `wargame-runtime` drives it.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod hash;
pub mod mechanics;
pub mod retry;
pub mod state;

pub use action::{ActionResponse, ActionShape, Modifier, ResourceChange};
pub use config::GameConfig;
pub use env::{
    ActionOracle, BioOracle, DocumentError, DocumentId, DocumentStore, LegalityOracle,
    NecessityOracle, NecessityVerdict, OracleError, PcgRng, ProfileOracle, ReportOracle,
    RngOracle, WinVerdict,
};
pub use error::{ErrorSeverity, GameError};
pub use hash::content_hash;
pub use mechanics::{DiceRoll, DiceSpec, MechanicError, MechanicKind, SeedSequence};
pub use retry::RetryBudget;
pub use state::{
    ActionLog, ActionRecord, Actor, Biography, BiographySource, ConfigurationError, Deck, GameState,
    GameStateBuilder, Participant, ResourceKey, ResourceLedger, Round, Rules, TeamRegistry, Turn,
    TurnTarget,
};
