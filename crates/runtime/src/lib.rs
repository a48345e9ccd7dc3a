//! Runtime orchestration for matrix wargames.
//!
//! This crate wires the oracle traits from `wargame-core` into an [`Umpire`]
//! that resolves turns under the bounded legality-retry protocol, and a
//! [`RoundDriver`] that walks the round plan.
//!
//! Modules are organized by responsibility:
//! - [`umpire`] hosts turn dispatch, sub-mechanics, the ledger and reports
//! - [`driver`] advances the round cursor
//! - [`api`] exposes the error type and the human input bridge
//! - [`providers`] builds participants and runs AI agents
//! - [`oracle`] and [`repository`] provide the oracle bundle and document stores
pub mod api;
pub mod config;
pub mod driver;
pub mod oracle;
pub mod providers;
pub mod repository;
pub mod umpire;

pub use api::{
    HumanInput, ProviderKind, Result, RuntimeError, ScriptedInput, StdinInput, parse_human_reply,
};
pub use config::RuntimeConfig;
pub use driver::{RoundDriver, RoundResults};
pub use oracle::OracleManager;
pub use providers::{AgentProvider, ParticipantFactory};
pub use repository::{FileDocumentStore, InMemoryDocumentStore};
pub use umpire::{GameStatus, TurnOutcome, Umpire};
