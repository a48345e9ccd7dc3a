//! Deterministic oracles driven by a pre-written script.
//!
//! [`ScriptedOracles`] implements every oracle trait from queues of canned
//! answers. It backs offline runs of the client and the runtime's tests.
//! Queues are consumed front to back; once a verdict queue is empty the
//! answer is `true`, once the action queue is empty `default_action` is
//! returned (or an error when there is none).

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use wargame_core::{
    ActionOracle, ActionResponse, ActionShape, BioOracle, LegalityOracle, MechanicKind,
    NecessityOracle, NecessityVerdict, OracleError, ProfileOracle, ReportOracle, WinVerdict,
};

/// Canned oracle answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OracleScript {
    /// Answers to action requests, in order.
    pub actions: Vec<ActionResponse>,
    /// Answer once `actions` runs out.
    pub default_action: Option<ActionResponse>,
    /// Legality verdicts, in order.
    pub legality: Vec<bool>,
    /// In-character verdicts, in order.
    pub in_character: Vec<bool>,
    /// Dice spec returned whenever dice necessity is queried.
    pub dice: Option<String>,
    /// Card count returned whenever card necessity is queried.
    pub cards: Option<usize>,
    /// Profile answers keyed by the exact question text.
    pub profile_answers: BTreeMap<String, String>,
    pub summary: Option<String>,
    pub winner: Option<WinVerdict>,
}

impl OracleScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, action: ActionResponse) -> Self {
        self.actions.push(action);
        self
    }

    pub fn default_action(mut self, action: ActionResponse) -> Self {
        self.default_action = Some(action);
        self
    }

    pub fn legality(mut self, verdicts: impl IntoIterator<Item = bool>) -> Self {
        self.legality.extend(verdicts);
        self
    }

    pub fn in_character(mut self, verdicts: impl IntoIterator<Item = bool>) -> Self {
        self.in_character.extend(verdicts);
        self
    }

    pub fn dice(mut self, spec: impl Into<String>) -> Self {
        self.dice = Some(spec.into());
        self
    }

    pub fn cards(mut self, count: usize) -> Self {
        self.cards = Some(count);
        self
    }

    pub fn profile_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.profile_answers.insert(question.into(), answer.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn winner(mut self, winner: WinVerdict) -> Self {
        self.winner = Some(winner);
        self
    }
}

/// Snapshot of how often each oracle was consulted, plus what it was asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleCalls {
    /// Prompts passed to the action oracle, in call order.
    pub action_prompts: Vec<String>,
    pub legality: usize,
    pub in_character: usize,
    pub necessity: Vec<MechanicKind>,
    pub profile: usize,
    pub summary: usize,
    pub winner: usize,
}

impl OracleCalls {
    pub fn actions(&self) -> usize {
        self.action_prompts.len()
    }
}

#[derive(Debug, Default)]
struct ScriptState {
    actions: VecDeque<ActionResponse>,
    legality: VecDeque<bool>,
    in_character: VecDeque<bool>,
    calls: OracleCalls,
}

/// Oracle bundle answering from an [`OracleScript`].
#[derive(Debug)]
pub struct ScriptedOracles {
    script: OracleScript,
    state: Mutex<ScriptState>,
}

impl ScriptedOracles {
    pub fn new(script: OracleScript) -> Self {
        let state = ScriptState {
            actions: script.actions.iter().cloned().collect(),
            legality: script.legality.iter().copied().collect(),
            in_character: script.in_character.iter().copied().collect(),
            calls: OracleCalls::default(),
        };
        Self {
            script,
            state: Mutex::new(state),
        }
    }

    pub fn script(&self) -> &OracleScript {
        &self.script
    }

    /// Returns a copy of the call counters.
    pub fn calls(&self) -> OracleCalls {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ScriptedOracles {
    fn default() -> Self {
        Self::new(OracleScript::default())
    }
}

impl ActionOracle for ScriptedOracles {
    fn produce(&self, context: &str, _shape: ActionShape) -> Result<ActionResponse, OracleError> {
        let mut state = self.lock();
        state.calls.action_prompts.push(context.to_owned());
        state
            .actions
            .pop_front()
            .or_else(|| self.script.default_action.clone())
            .ok_or_else(|| OracleError::unavailable("action", "script has no actions left"))
    }
}

impl LegalityOracle for ScriptedOracles {
    fn check(&self, _action: &ActionResponse, _game_status: &str) -> Result<bool, OracleError> {
        let mut state = self.lock();
        state.calls.legality += 1;
        Ok(state.legality.pop_front().unwrap_or(true))
    }
}

impl BioOracle for ScriptedOracles {
    fn in_character(
        &self,
        _action: &ActionResponse,
        _participant_bio: &str,
    ) -> Result<bool, OracleError> {
        let mut state = self.lock();
        state.calls.in_character += 1;
        Ok(state.in_character.pop_front().unwrap_or(true))
    }
}

impl NecessityOracle for ScriptedOracles {
    fn check(
        &self,
        _turn_context: &str,
        asking_about: MechanicKind,
    ) -> Result<NecessityVerdict, OracleError> {
        self.lock().calls.necessity.push(asking_about);
        let verdict = match asking_about {
            MechanicKind::Dice => self
                .script
                .dice
                .as_deref()
                .map_or_else(NecessityVerdict::none, NecessityVerdict::dice),
            MechanicKind::Card => self
                .script
                .cards
                .map_or_else(NecessityVerdict::none, NecessityVerdict::cards),
        };
        Ok(verdict)
    }
}

impl ProfileOracle for ScriptedOracles {
    /// Unknown questions get an empty answer, which leaves the attribute unset.
    fn answer(&self, question: &str, _document: &str) -> Result<String, OracleError> {
        self.lock().calls.profile += 1;
        Ok(self
            .script
            .profile_answers
            .get(question)
            .cloned()
            .unwrap_or_default())
    }
}

impl ReportOracle for ScriptedOracles {
    fn summarize(&self, _context: &str) -> Result<String, OracleError> {
        self.lock().calls.summary += 1;
        Ok(self.script.summary.clone().unwrap_or_default())
    }

    fn deduce_winner(&self, _context: &str) -> Result<WinVerdict, OracleError> {
        self.lock().calls.winner += 1;
        Ok(self.script.winner.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_served_in_order_then_default() {
        let oracles = ScriptedOracles::new(
            OracleScript::new()
                .action(ActionResponse::new("advance"))
                .default_action(ActionResponse::new("hold")),
        );

        let first = ActionOracle::produce(&oracles, "p1", ActionShape).unwrap();
        let second = ActionOracle::produce(&oracles, "p2", ActionShape).unwrap();
        assert_eq!(first.action, "advance");
        assert_eq!(second.action, "hold");
        assert_eq!(oracles.calls().action_prompts, vec!["p1", "p2"]);
    }

    #[test]
    fn exhausted_actions_without_default_is_an_error() {
        let oracles = ScriptedOracles::default();
        assert!(matches!(
            ActionOracle::produce(&oracles, "p", ActionShape),
            Err(OracleError::Unavailable { oracle: "action", .. })
        ));
    }

    #[test]
    fn verdict_queues_fall_back_to_true() {
        let oracles = ScriptedOracles::new(OracleScript::new().legality([false]).in_character([false]));
        let action = ActionResponse::new("x");

        assert!(!LegalityOracle::check(&oracles, &action, "{}").unwrap());
        assert!(LegalityOracle::check(&oracles, &action, "{}").unwrap());
        assert!(!oracles.in_character(&action, "bio").unwrap());
        assert!(oracles.in_character(&action, "bio").unwrap());

        let calls = oracles.calls();
        assert_eq!(calls.legality, 2);
        assert_eq!(calls.in_character, 2);
    }

    #[test]
    fn necessity_answers_per_mechanic() {
        let oracles = ScriptedOracles::new(OracleScript::new().dice("3d8"));

        let dice = NecessityOracle::check(&oracles, "turn", MechanicKind::Dice).unwrap();
        let cards = NecessityOracle::check(&oracles, "turn", MechanicKind::Card).unwrap();
        assert_eq!(dice, NecessityVerdict::dice("3d8"));
        assert_eq!(cards, NecessityVerdict::none());
        assert_eq!(
            oracles.calls().necessity,
            vec![MechanicKind::Dice, MechanicKind::Card]
        );
    }

    #[test]
    fn profile_answers_by_question() {
        let oracles =
            ScriptedOracles::new(OracleScript::new().profile_answer("Disposition?", "wary"));
        assert_eq!(oracles.answer("Disposition?", "doc").unwrap(), "wary");
        assert_eq!(oracles.answer("Other?", "doc").unwrap(), "");
    }
}
