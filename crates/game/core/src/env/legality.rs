//! Rules legality oracle.

use crate::action::ActionResponse;
use crate::env::OracleError;

/// Oracle judging whether an action is consistent with the rule text.
///
/// `game_status` is the rendered status snapshot (action log, team registry,
/// resource ledger) the judgment is grounded in.
pub trait LegalityOracle: Send + Sync {
    fn check(&self, action: &ActionResponse, game_status: &str) -> Result<bool, OracleError>;
}
