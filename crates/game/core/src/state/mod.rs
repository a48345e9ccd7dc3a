//! Authoritative game state representation.
//!
//! [`GameState`] holds the immutable rule reference and round plan, the team
//! registry, and the optional sub-mechanic configuration (dice, deck,
//! starting resources). The umpire owns the single instance for a game; the
//! registry is only handed out as copies.
mod deck;
mod error;
mod ledger;
mod log;
mod participant;
mod turn;

pub use deck::Deck;
pub use error::ConfigurationError;
pub use ledger::{ResourceKey, ResourceLedger};
pub use log::{ActionLog, ActionRecord, Actor};
pub use participant::{Biography, BiographySource, Participant};
pub use turn::{Round, Turn, TurnTarget};

use std::collections::BTreeMap;

use crate::env::{DocumentId, DocumentStore};

/// Team name → ordered participants.
pub type TeamRegistry = BTreeMap<String, Vec<Participant>>;

/// Rule text together with its content-addressed document reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    pub document: DocumentId,
    pub text: String,
}

/// Canonical state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    rules: Rules,
    rounds: Vec<Round>,
    teams: TeamRegistry,
    uses_dice: bool,
    deck: Option<Deck>,
    initial_resources: BTreeMap<ResourceKey, i64>,
}

impl GameState {
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::default()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rules_text(&self) -> &str {
        &self.rules.text
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn uses_dice(&self) -> bool {
        self.uses_dice
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn deck_mut(&mut self) -> Option<&mut Deck> {
        self.deck.as_mut()
    }

    pub fn initial_resources(&self) -> &BTreeMap<ResourceKey, i64> {
        &self.initial_resources
    }

    /// Registers a new team.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::DuplicateTeam` if the name is taken; the
    /// registry is left untouched.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        participants: Vec<Participant>,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.teams.contains_key(&name) {
            return Err(ConfigurationError::DuplicateTeam { name });
        }
        self.teams.insert(name, participants);
        Ok(())
    }

    /// Copy of the team registry.
    pub fn teams(&self) -> TeamRegistry {
        self.teams.clone()
    }

    /// Read-only view of the registry, for status snapshots.
    pub fn team_registry(&self) -> &TeamRegistry {
        &self.teams
    }

    pub fn participant(&self, team: &str, target: &str) -> Option<&Participant> {
        self.teams
            .get(team)?
            .iter()
            .find(|participant| participant.answers_to(target))
    }

    pub fn participant_mut(&mut self, team: &str, target: &str) -> Option<&mut Participant> {
        self.teams
            .get_mut(team)?
            .iter_mut()
            .find(|participant| participant.answers_to(target))
    }
}

/// Builder for [`GameState`].
#[derive(Debug, Default)]
pub struct GameStateBuilder {
    rules_text: Option<String>,
    rules_document: Option<DocumentId>,
    rounds: Vec<Round>,
    teams: Vec<(String, Vec<Participant>)>,
    uses_dice: bool,
    deck: Option<Deck>,
    initial_resources: BTreeMap<ResourceKey, i64>,
}

impl GameStateBuilder {
    /// Supplies the rules as raw text (stored into the document store on build).
    pub fn rules_text(mut self, text: impl Into<String>) -> Self {
        self.rules_text = Some(text.into());
        self
    }

    /// Supplies the rules as a reference to an existing document.
    pub fn rules_document(mut self, document: DocumentId) -> Self {
        self.rules_document = Some(document);
        self
    }

    pub fn round(mut self, round: impl Into<Round>) -> Self {
        self.rounds.push(round.into());
        self
    }

    pub fn rounds(mut self, rounds: impl IntoIterator<Item = Round>) -> Self {
        self.rounds.extend(rounds);
        self
    }

    pub fn team(mut self, name: impl Into<String>, participants: Vec<Participant>) -> Self {
        self.teams.push((name.into(), participants));
        self
    }

    pub fn uses_dice(mut self, uses_dice: bool) -> Self {
        self.uses_dice = uses_dice;
        self
    }

    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn initial_resource(
        mut self,
        team: impl Into<String>,
        participant: impl Into<String>,
        resource: impl Into<String>,
        amount: i64,
    ) -> Self {
        self.initial_resources
            .insert(ResourceKey::new(team, participant, resource), amount);
        self
    }

    /// Resolves the rules through `store` and assembles the state.
    ///
    /// # Errors
    ///
    /// - `RulesSourceMissing` / `RulesSourceConflict` unless exactly one rules
    ///   form was supplied
    /// - `DuplicateTeam` if two teams share a name
    /// - `Document` if the store cannot write the text or read the reference
    pub fn build(self, store: &mut dyn DocumentStore) -> Result<GameState, ConfigurationError> {
        let rules = match (self.rules_text, self.rules_document) {
            (None, None) => return Err(ConfigurationError::RulesSourceMissing),
            (Some(_), Some(_)) => return Err(ConfigurationError::RulesSourceConflict),
            (Some(text), None) => {
                let document = store.put(&text)?;
                Rules { document, text }
            }
            (None, Some(document)) => {
                let text = store.get(&document)?;
                Rules { document, text }
            }
        };

        let mut state = GameState {
            rules,
            rounds: self.rounds,
            teams: TeamRegistry::new(),
            uses_dice: self.uses_dice,
            deck: self.deck,
            initial_resources: self.initial_resources,
        };
        for (name, participants) in self.teams {
            state.add_team(name, participants)?;
        }

        Ok(state)
    }
}
