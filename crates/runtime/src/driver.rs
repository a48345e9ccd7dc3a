//! Cursor over the round plan.
//!
//! The driver hands each turn of the next round to the [`Umpire`] in declared
//! order and advances its cursor once the whole round has been attempted.
//! Soft failures (`TurnOutcome::NoValidAction`) do not stop the round; a
//! fatal error propagates and leaves the cursor on the round that failed.

use std::collections::BTreeMap;

use crate::api::Result;
use crate::umpire::{TurnOutcome, Umpire};

/// Turn index within a round → outcome.
pub type RoundResults = BTreeMap<usize, TurnOutcome>;

pub struct RoundDriver {
    umpire: Umpire,
    cursor: usize,
}

impl RoundDriver {
    pub fn new(umpire: Umpire) -> Self {
        Self { umpire, cursor: 0 }
    }

    /// Index of the next round to run; equals the round count when done.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_rounds(&self) -> usize {
        self.umpire.game().rounds().len()
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.total_rounds()
    }

    pub fn umpire(&self) -> &Umpire {
        &self.umpire
    }

    pub fn umpire_mut(&mut self) -> &mut Umpire {
        &mut self.umpire
    }

    pub fn into_umpire(self) -> Umpire {
        self.umpire
    }

    /// Runs the next round.
    ///
    /// Returns `Ok(None)` without touching any state when every round has
    /// already been run.
    pub fn advance_one_round(&mut self) -> Result<Option<RoundResults>> {
        let Some(round) = self.umpire.game().rounds().get(self.cursor).cloned() else {
            return Ok(None);
        };

        tracing::info!(
            target: "runtime::driver",
            round = self.cursor,
            turns = round.len(),
            "Round started"
        );

        let mut results = RoundResults::new();
        for (index, turn) in round.turns().iter().enumerate() {
            let outcome = self.umpire.resolve_turn(turn).inspect_err(|err| {
                tracing::error!(
                    target: "runtime::driver",
                    round = self.cursor,
                    turn = index,
                    error = %err,
                    "Turn failed"
                );
            })?;
            results.insert(index, outcome);
        }

        let accepted = results.values().filter(|o| o.is_accepted()).count();
        tracing::info!(
            target: "runtime::driver",
            round = self.cursor,
            accepted,
            failed = results.len() - accepted,
            "Round completed"
        );

        self.cursor += 1;
        Ok(Some(results))
    }

    /// Runs every remaining round.
    ///
    /// Returns `Ok(None)` when nothing was left on entry, so "no work" is
    /// distinguishable from "ran rounds".
    pub fn drain_all_remaining_rounds(&mut self) -> Result<Option<BTreeMap<usize, RoundResults>>> {
        if self.is_done() {
            return Ok(None);
        }

        let mut all = BTreeMap::new();
        loop {
            let index = self.cursor;
            match self.advance_one_round()? {
                Some(results) => {
                    all.insert(index, results);
                }
                None => break,
            }
        }
        Ok(Some(all))
    }
}
