//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the umpire and driver can stay focused on turn resolution.

pub mod errors;
pub mod providers;

pub use errors::{ProviderKind, Result, RuntimeError};
pub use providers::{HumanInput, ScriptedInput, StdinInput, parse_human_reply};
