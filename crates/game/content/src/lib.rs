//! Data-driven scenario definitions and scripted oracles.
//!
//! This crate provides:
//! - Scenario files (RON or TOML) declaring rules, the round plan, teams,
//!   dice/deck usage, starting resources and an oracle script
//! - [`ScriptedOracles`], a deterministic stand-in for every oracle trait,
//!   driven by an [`OracleScript`]
//!
//! Content is turned into a `GameState` by the client; nothing here performs
//! game logic.

pub mod scripted;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scripted::{OracleCalls, OracleScript, ScriptedOracles};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ParticipantSpec, RulesSpec, ScenarioLoader, ScenarioSpec,
};
