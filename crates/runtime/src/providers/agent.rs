//! AI participant action provider.
//!
//! An agent is asked for an action given the scenario, and the answer is kept
//! only if the bio oracle judges it something this character would plausibly
//! do. Rejections reformulate the scenario and try again, up to a budget.

use wargame_core::{ActionResponse, ActionShape, Participant, RetryBudget};

use crate::api::Result;
use crate::oracle::OracleManager;

/// Provider for AI-backed participants.
#[derive(Clone)]
pub struct AgentProvider {
    oracles: OracleManager,
}

impl AgentProvider {
    pub const OUT_OF_CHARACTER: &'static str =
        "Your last response was deemed out of character. Try again.";

    pub fn new(oracles: OracleManager) -> Self {
        Self { oracles }
    }

    /// Requests an in-character action from `participant`.
    ///
    /// Returns `Ok(None)` when every one of `attempts` candidates was judged
    /// out of character. An accepted action is appended to the participant's
    /// history before it is returned. Oracle failures propagate.
    pub fn request_action(
        &self,
        participant: &mut Participant,
        scenario: &str,
        attempts: u32,
    ) -> Result<Option<ActionResponse>> {
        let mut budget = RetryBudget::new(attempts, format!("Scenario: {scenario}"));

        while let Some(prompt) = budget.next_prompt() {
            let candidate = self.oracles.actions().produce(prompt, ActionShape)?;

            if self.oracles.bio().in_character(&candidate, participant.bio())? {
                tracing::debug!(
                    target: "runtime::agent",
                    participant = participant.label(),
                    attempt = budget.attempt(),
                    action = %candidate.action,
                    "Agent action accepted as in character"
                );
                participant.record_action(candidate.clone());
                return Ok(Some(candidate));
            }

            tracing::debug!(
                target: "runtime::agent",
                participant = participant.label(),
                attempt = budget.attempt(),
                "Agent action rejected as out of character"
            );
            budget.reject(Self::OUT_OF_CHARACTER);
        }

        tracing::warn!(
            target: "runtime::agent",
            participant = participant.label(),
            attempts = budget.max_attempts(),
            "Agent produced no in-character action"
        );
        Ok(None)
    }
}
