//! The umpire: turn dispatch, legality enforcement and sub-mechanics.
//!
//! Every turn goes through the same bounded protocol: produce a candidate
//! action, ask the legality oracle, and on rejection reformulate the prompt
//! with a notice quoting the rules. What differs per responder is where the
//! candidate comes from and what exhaustion means:
//!
//! | Responder        | Candidate source            | Exhaustion                         |
//! |------------------|-----------------------------|------------------------------------|
//! | Umpire           | action oracle               | `RuntimeError::LegalityExhausted`  |
//! | Human            | [`HumanInput`] reply        | [`TurnOutcome::NoValidAction`]     |
//! | AI participant   | [`AgentProvider`] loop      | [`TurnOutcome::NoValidAction`]     |
//!
//! The umpire owns the action log, the resource ledger and the game state
//! (including the deck); nothing else mutates them.

mod status;

pub use status::{GameStatus, ParticipantStatus, ResourceEntry, TeamStatus};

use wargame_core::{
    ActionLog, ActionRecord, ActionResponse, ActionShape, Actor, DiceRoll, DiceSpec, GameConfig,
    GameState, MechanicKind, Modifier, OracleError, ResourceChange, ResourceKey, ResourceLedger,
    RetryBudget, SeedSequence, Turn, TurnTarget, WinVerdict, mechanics::parse_card_count,
};

use crate::api::{HumanInput, ProviderKind, Result, RuntimeError, parse_human_reply};
use crate::oracle::OracleManager;
use crate::providers::AgentProvider;

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action passed the legality check and was logged.
    Accepted(ActionResponse),
    /// A participant exhausted its attempts; the game continues.
    NoValidAction,
}

impl TurnOutcome {
    pub fn action(&self) -> Option<&ActionResponse> {
        match self {
            Self::Accepted(action) => Some(action),
            Self::NoValidAction => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Where a participant turn is routed.
enum Responder {
    Human,
    Agent,
}

pub struct Umpire {
    game: GameState,
    oracles: OracleManager,
    agent: AgentProvider,
    config: GameConfig,
    ledger: ResourceLedger,
    log: ActionLog,
    seeds: SeedSequence,
    human_input: Option<Box<dyn HumanInput>>,
}

impl Umpire {
    /// Creates an umpire for `game`. The ledger starts as a copy of the
    /// game's initial resource template.
    pub fn new(game: GameState, oracles: OracleManager, config: GameConfig) -> Self {
        let ledger = ResourceLedger::from_template(game.initial_resources());
        Self {
            agent: AgentProvider::new(oracles.clone()),
            seeds: SeedSequence::new(config.seed),
            game,
            oracles,
            config,
            ledger,
            log: ActionLog::new(),
            human_input: None,
        }
    }

    /// Installs the bridge used for human participants.
    pub fn with_human_input(mut self, input: impl HumanInput + 'static) -> Self {
        self.set_human_input(input);
        self
    }

    pub fn set_human_input(&mut self, input: impl HumanInput + 'static) {
        self.human_input = Some(Box::new(input));
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn actions(&self) -> &[ActionRecord] {
        self.log.records()
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    // ========================================================================
    // Turn dispatch
    // ========================================================================

    /// Resolves one turn.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::Resolution`] when the target is not the umpire and
    ///   does not name a participant of `turn.team`; the log is untouched
    /// - [`RuntimeError::LegalityExhausted`] when the umpire's own ruling is
    ///   rejected on every attempt
    /// - oracle, document and input failures
    pub fn resolve_turn(&mut self, turn: &Turn) -> Result<TurnOutcome> {
        match turn.target() {
            TurnTarget::Umpire => self.resolve_umpire_turn(turn).map(TurnOutcome::Accepted),
            TurnTarget::Participant { team, name } => {
                let Some(team) = team else {
                    return Err(unresolved(turn));
                };
                let responder = match self.game.participant(team, name) {
                    Some(participant) if participant.is_human() => Responder::Human,
                    Some(_) => Responder::Agent,
                    None => return Err(unresolved(turn)),
                };
                match responder {
                    Responder::Human => self.resolve_human_turn(team, name, &turn.activity),
                    Responder::Agent => self.resolve_agent_turn(team, name, &turn.activity),
                }
            }
        }
    }

    fn resolve_umpire_turn(&mut self, turn: &Turn) -> Result<ActionResponse> {
        let mut context = format!(
            "Following the rules of this game, perform the following action as Umpire: '{}'. \
             The game state is: {}.",
            turn.activity,
            self.status_json()?
        );
        // Rolled and drawn results are fixed before the first attempt and
        // carried unchanged through every retry.
        context.push_str(&self.sub_mechanic_facts(&turn.activity)?);

        let notice = self.legality_notice();
        let mut budget = RetryBudget::new(self.config.max_attempts, context);

        while let Some(prompt) = budget.next_prompt() {
            let candidate = self.oracles.actions().produce(prompt, ActionShape)?;
            if self.is_legal(&candidate)? {
                self.accept(Actor::Umpire, &turn.activity, candidate.clone(), budget.attempt());
                return Ok(candidate);
            }
            tracing::debug!(
                target: "runtime::umpire",
                attempt = budget.attempt(),
                "Umpire ruling rejected as illegal"
            );
            budget.reject(&notice);
        }

        tracing::error!(
            target: "runtime::umpire",
            activity = %turn.activity,
            attempts = budget.max_attempts(),
            "Umpire exhausted its legality attempts"
        );
        Err(RuntimeError::LegalityExhausted {
            activity: turn.activity.clone(),
            attempts: budget.max_attempts(),
        })
    }

    fn resolve_human_turn(&mut self, team: &str, target: &str, activity: &str) -> Result<TurnOutcome> {
        if self.human_input.is_none() {
            return Err(RuntimeError::ProviderNotSet {
                kind: ProviderKind::Human,
            });
        }

        let base = format!(
            "It is your turn in the game. You are being presented with this action: '{}'. \
             Return your response in the following format: '{}'",
            activity,
            ActionShape::TEMPLATE
        );
        let notice = self.legality_notice();
        let mut budget = RetryBudget::new(self.config.max_attempts, base);

        while let Some(prompt) = budget.next_prompt() {
            let reply = {
                let participant = self
                    .game
                    .participant(team, target)
                    .ok_or_else(|| unresolved_parts(team, target))?;
                let input = self
                    .human_input
                    .as_deref_mut()
                    .ok_or(RuntimeError::ProviderNotSet {
                        kind: ProviderKind::Human,
                    })?;
                input.prompt(participant, prompt).map_err(RuntimeError::Input)?
            };
            let candidate = parse_human_reply(&reply);

            if self.is_legal(&candidate)? {
                let actor = self.participant_actor(team, target, true);
                if let Some(participant) = self.game.participant_mut(team, target) {
                    participant.record_action(candidate.clone());
                }
                self.accept(actor, activity, candidate.clone(), budget.attempt());
                return Ok(TurnOutcome::Accepted(candidate));
            }
            tracing::debug!(
                target: "runtime::umpire",
                team,
                participant = target,
                attempt = budget.attempt(),
                "Human action rejected as illegal"
            );
            budget.reject(&notice);
        }

        tracing::warn!(
            target: "runtime::umpire",
            team,
            participant = target,
            "Human participant produced no legal action"
        );
        Ok(TurnOutcome::NoValidAction)
    }

    fn resolve_agent_turn(&mut self, team: &str, target: &str, activity: &str) -> Result<TurnOutcome> {
        let notice = self.legality_notice();
        let mut budget = RetryBudget::new(
            self.config.max_attempts,
            format!("It is your turn in the game. {activity}"),
        );

        while let Some(prompt) = budget.next_prompt() {
            let participant = self
                .game
                .participant_mut(team, target)
                .ok_or_else(|| unresolved_parts(team, target))?;
            let Some(candidate) =
                self.agent
                    .request_action(participant, prompt, self.config.agent_attempts)?
            else {
                // Out of character on every try: no point asking the umpire again.
                tracing::warn!(
                    target: "runtime::umpire",
                    team,
                    participant = target,
                    "Agent produced no in-character action"
                );
                return Ok(TurnOutcome::NoValidAction);
            };

            if self.is_legal(&candidate)? {
                let actor = self.participant_actor(team, target, false);
                self.accept(actor, activity, candidate.clone(), budget.attempt());
                return Ok(TurnOutcome::Accepted(candidate));
            }
            tracing::debug!(
                target: "runtime::umpire",
                team,
                participant = target,
                attempt = budget.attempt(),
                "Agent action rejected as illegal"
            );
            budget.reject(&notice);
        }

        tracing::warn!(
            target: "runtime::umpire",
            team,
            participant = target,
            "Agent produced no legal action"
        );
        Ok(TurnOutcome::NoValidAction)
    }

    fn is_legal(&self, candidate: &ActionResponse) -> Result<bool> {
        let status = self.status_json()?;
        Ok(self.oracles.legality().check(candidate, &status)?)
    }

    fn legality_notice(&self) -> String {
        format!(
            "Your last action was deemed not legal in the game rules. The game rules are: {}. Try again.",
            self.game.rules_text()
        )
    }

    fn participant_actor(&self, team: &str, target: &str, is_human: bool) -> Actor {
        let participant = self
            .game
            .participant(team, target)
            .map_or_else(|| target.to_owned(), |p| p.label().to_owned());
        let team = team.to_owned();
        if is_human {
            Actor::Human { team, participant }
        } else {
            Actor::Agent { team, participant }
        }
    }

    fn accept(&mut self, actor: Actor, activity: &str, action: ActionResponse, attempt: u32) {
        let record = self.log.append(actor, activity, action, attempt);
        tracing::info!(
            target: "runtime::umpire",
            sequence = record.sequence,
            team = record.actor.team().unwrap_or("-"),
            attempt,
            action = %record.action.action,
            "Action accepted"
        );
    }

    // ========================================================================
    // Sub-mechanics
    // ========================================================================

    /// Asks whether the turn needs dice (when enabled) and cards (when a
    /// non-empty deck exists), in that order, and returns the results as text.
    fn sub_mechanic_facts(&mut self, activity: &str) -> Result<String> {
        let mut facts = String::new();

        if self.game.uses_dice() {
            let query = format!(
                "Based on the current turn, is the use of a dice required by the Umpire? \
                 Current turn: {activity}."
            );
            let verdict = self.oracles.necessity().check(&query, MechanicKind::Dice)?;
            if verdict.requires(MechanicKind::Dice) {
                let spec: DiceSpec = verdict.spec.parse().map_err(OracleError::from)?;
                let roll = self.roll_dice(&spec)?;
                facts.push_str(&format!(
                    " A '{}' was rolled and the result was '{}'.",
                    roll.spec, roll.total
                ));
            }
        }

        if self.game.deck().is_some_and(|deck| !deck.is_empty()) {
            let query = format!(
                "Based on the current turn, is the use of drawing a random card required by \
                 the Umpire? Current turn: {activity}."
            );
            let verdict = self.oracles.necessity().check(&query, MechanicKind::Card)?;
            if verdict.requires(MechanicKind::Card) {
                let count = parse_card_count(&verdict.spec).map_err(OracleError::from)?;
                let cards = self.draw_cards(count);
                facts.push_str(&format!(
                    " {} cards were drawn with the following results: {}.",
                    cards.len(),
                    cards.join(", ")
                ));
            }
        }

        Ok(facts)
    }

    /// Rolls `spec` with faces in `[config.lowest_face, sides]`.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::Oracle`] wrapping the [`MechanicError`] when `spec`
    /// exceeds the dice limits or its sides are below the configured floor.
    pub fn roll_dice(&mut self, spec: &DiceSpec) -> Result<DiceRoll> {
        let roll = spec
            .roll(self.oracles.rng(), &mut self.seeds, self.config.lowest_face)
            .map_err(OracleError::from)?;
        tracing::info!(
            target: "runtime::umpire",
            spec = %roll.spec,
            total = roll.total,
            faces = ?roll.faces,
            "Dice rolled"
        );
        Ok(roll)
    }

    /// Draws up to `count` cards without replacement. Without a deck nothing
    /// is drawn.
    pub fn draw_cards(&mut self, count: usize) -> Vec<String> {
        let Some(deck) = self.game.deck_mut() else {
            return Vec::new();
        };
        let cards = deck.draw(count, self.oracles.rng(), &mut self.seeds);
        tracing::info!(
            target: "runtime::umpire",
            requested = count,
            drawn = cards.len(),
            remaining = deck.len(),
            "Cards drawn"
        );
        cards
    }

    // ========================================================================
    // Resource ledger
    // ========================================================================

    /// Adds `amount` and returns the new balance (missing entries start at 0).
    pub fn add_resource(&mut self, team: &str, participant: &str, resource: &str, amount: i64) -> i64 {
        self.ledger
            .add(ResourceKey::new(team, participant, resource), amount)
    }

    /// Subtracts `amount` and returns the new balance, which may be negative.
    pub fn subtract_resource(
        &mut self,
        team: &str,
        participant: &str,
        resource: &str,
        amount: i64,
    ) -> i64 {
        self.ledger
            .subtract(ResourceKey::new(team, participant, resource), amount)
    }

    /// Current balance, without creating an entry.
    pub fn resource(&self, team: &str, participant: &str, resource: &str) -> Option<i64> {
        self.ledger
            .amount(&ResourceKey::new(team, participant, resource))
    }

    /// Applies the resource changes an action declares.
    ///
    /// Turn resolution never calls this; callers decide when an accepted
    /// action's claims should hit the ledger.
    pub fn apply_resource_changes(
        &mut self,
        team: &str,
        participant: &str,
        changes: &[ResourceChange],
    ) -> Vec<i64> {
        changes
            .iter()
            .map(|change| match change.modifier {
                Modifier::Add(amount) => self.add_resource(team, participant, &change.name, amount),
                Modifier::Subtract(amount) => {
                    self.subtract_resource(team, participant, &change.name, amount)
                }
            })
            .collect()
    }

    // ========================================================================
    // Status and reports
    // ========================================================================

    pub fn game_status(&self) -> GameStatus<'_> {
        GameStatus::new(self.log.records(), self.game.team_registry(), &self.ledger)
    }

    fn status_json(&self) -> Result<String> {
        self.game_status().to_json().map_err(RuntimeError::Status)
    }

    fn report_context(&self) -> Result<String> {
        let players: Vec<String> = self
            .game
            .team_registry()
            .iter()
            .map(|(team, participants)| {
                let names: Vec<&str> = participants.iter().map(|p| p.label()).collect();
                format!("{team}: {}", names.join(", "))
            })
            .collect();
        let actions = serde_json::to_string(self.log.records()).map_err(RuntimeError::Status)?;

        Ok(format!(
            "Game rules: {}\nPlayers: {}\nAction log: {}",
            self.game.rules_text(),
            players.join("; "),
            actions
        ))
    }

    /// Asks the report oracle to summarize the game so far.
    pub fn produce_summary(&self) -> Result<String> {
        let summary = self.oracles.report().summarize(&self.report_context()?)?;
        tracing::info!(target: "runtime::umpire", "Game summary produced");
        Ok(summary)
    }

    /// Asks the report oracle who won.
    pub fn deduce_winner(&self) -> Result<WinVerdict> {
        let verdict = self.oracles.report().deduce_winner(&self.report_context()?)?;
        tracing::info!(
            target: "runtime::umpire",
            team = verdict.team.as_deref().unwrap_or("-"),
            player = verdict.player.as_deref().unwrap_or("-"),
            "Winner deduced"
        );
        Ok(verdict)
    }
}

fn unresolved(turn: &Turn) -> RuntimeError {
    RuntimeError::Resolution {
        team: turn.team.clone(),
        target: turn.target.clone(),
    }
}

fn unresolved_parts(team: &str, target: &str) -> RuntimeError {
    RuntimeError::Resolution {
        team: Some(team.to_owned()),
        target: target.to_owned(),
    }
}
