#![allow(dead_code)]

use std::sync::Arc;

use wargame_content::{OracleScript, ScriptedOracles};
use wargame_core::{ActionResponse, Biography, Deck, GameConfig, GameState, Participant, Round};
use wargame_runtime::{InMemoryDocumentStore, OracleManager, Umpire};

pub const RULES: &str = "Each team acts once per round. No strikes on civilian shipping.";

pub fn admiral() -> Participant {
    Participant::new(&Biography::with_directive("Keep the strait open"), false).with_name("Admiral")
}

pub fn envoy() -> Participant {
    Participant::new(&Biography::with_directive("Broker a ceasefire"), true).with_name("Envoy")
}

/// Builder for test games with a Blue AI admiral and a Red human envoy.
pub struct Fixture {
    pub rounds: Vec<Round>,
    pub uses_dice: bool,
    pub deck: Option<Deck>,
    pub script: OracleScript,
    pub config: GameConfig,
}

impl Fixture {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self {
            rounds,
            uses_dice: false,
            deck: None,
            script: OracleScript::new().default_action(ActionResponse::new("proceed")),
            config: GameConfig::default(),
        }
    }

    pub fn script(mut self, script: OracleScript) -> Self {
        self.script = script;
        self
    }

    pub fn dice(mut self) -> Self {
        self.uses_dice = true;
        self
    }

    pub fn deck(mut self, cards: &[&str]) -> Self {
        self.deck = Some(Deck::new(cards.iter().copied()));
        self
    }

    pub fn game(&self) -> GameState {
        let mut builder = GameState::builder()
            .rules_text(RULES)
            .rounds(self.rounds.clone())
            .team("Blue", vec![admiral()])
            .team("Red", vec![envoy()])
            .uses_dice(self.uses_dice)
            .initial_resource("Blue", "Admiral", "ships", 12);
        if let Some(deck) = &self.deck {
            builder = builder.deck(deck.clone());
        }
        let mut store = InMemoryDocumentStore::new();
        builder.build(&mut store).expect("fixture game should build")
    }

    pub fn umpire(self) -> (Umpire, Arc<ScriptedOracles>) {
        let game = self.game();
        let oracles = Arc::new(ScriptedOracles::new(self.script));
        let umpire = Umpire::new(
            game,
            OracleManager::from_shared(oracles.clone()),
            self.config,
        );
        (umpire, oracles)
    }
}

pub fn script() -> OracleScript {
    OracleScript::new().default_action(ActionResponse::new("proceed"))
}
