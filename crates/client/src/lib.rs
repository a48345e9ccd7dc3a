//! Composition root for the `wargame` binary.
//!
//! # Architecture
//!
//! ```text
//! Client
//!   ├─→ Content (scenario files, scripted oracles)
//!   ├─→ Runtime (umpire, round driver, document store)
//!   └─→ Human input (stdin)
//! ```
//!
//! The client owns no game logic; it turns a scenario file into a
//! [`wargame_core::GameState`] and hands it to the runtime.

pub mod config;
pub mod logging;
pub mod session;

pub use config::ClientConfig;
pub use session::{Session, assemble_game};
