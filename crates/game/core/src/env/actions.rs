//! Action production oracle.

use crate::action::{ActionResponse, ActionShape};
use crate::env::OracleError;

/// Oracle that turns free-text context into a structured action.
///
/// Used both for the umpire's own rulings and for AI participants. The
/// context already contains any rejection notice from a previous attempt.
pub trait ActionOracle: Send + Sync {
    fn produce(&self, context: &str, shape: ActionShape) -> Result<ActionResponse, OracleError>;
}
