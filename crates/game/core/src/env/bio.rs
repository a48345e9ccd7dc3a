//! In-character plausibility oracle.

use crate::action::ActionResponse;
use crate::env::OracleError;

/// Oracle judging whether a character would plausibly take an action.
pub trait BioOracle: Send + Sync {
    fn in_character(&self, action: &ActionResponse, participant_bio: &str)
    -> Result<bool, OracleError>;
}
