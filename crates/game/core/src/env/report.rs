//! End-of-game reporting oracle.

use crate::env::OracleError;

/// Winner named by the report oracle. `player` is `None` when a whole team won.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WinVerdict {
    pub team: Option<String>,
    pub player: Option<String>,
}

pub trait ReportOracle: Send + Sync {
    /// Summarizes the game from its action log, rules, and players.
    fn summarize(&self, context: &str) -> Result<String, OracleError>;

    /// Names the winner of the game.
    fn deduce_winner(&self, context: &str) -> Result<WinVerdict, OracleError>;
}
