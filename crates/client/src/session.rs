//! Turns a scenario file into a ready-to-run round driver.

use std::sync::Arc;

use anyhow::{Context, Result};
use wargame_content::{ContentFactory, ScenarioSpec, ScriptedOracles};
use wargame_core::{BiographySource, Deck, DocumentStore, GameState};
use wargame_runtime::{
    HumanInput, OracleManager, ParticipantFactory, RoundDriver, RuntimeConfig, Umpire,
};

/// Builds the game state a scenario describes.
///
/// Rules given as a document are stored in `store` and referenced by id;
/// biography files are stored the same way and completed through the
/// profile oracle.
pub fn assemble_game(
    factory: &ContentFactory,
    spec: &ScenarioSpec,
    participants: &ParticipantFactory,
    store: &mut dyn DocumentStore,
) -> Result<GameState> {
    let rules = factory.rules_text(&spec.rules)?;
    let mut builder = GameState::builder();
    builder = if spec.rules.document.is_some() {
        let document = store.put(&rules).context("Failed to store rules document")?;
        builder.rules_document(document)
    } else {
        builder.rules_text(rules)
    };

    for (team, members) in &spec.teams {
        let mut roster = Vec::with_capacity(members.len());
        for member in members {
            let overrides = member.biography.clone().unwrap_or_default();
            let source = match factory.biography_text(member)? {
                Some(text) => BiographySource::Document {
                    document: store.put(&text).context("Failed to store biography")?,
                    overrides,
                },
                None => BiographySource::Attributes(overrides),
            };

            let mut participant = participants
                .build(source, member.is_human, store)
                .with_context(|| format!("Failed to build participant of team {team}"))?;
            if let Some(name) = &member.name {
                participant = participant.with_name(name.clone());
            }
            roster.push(participant);
        }
        builder = builder.team(team.clone(), roster);
    }

    for (team, members) in &spec.resources {
        for (participant, resources) in members {
            for (resource, amount) in resources {
                builder = builder.initial_resource(team, participant, resource, *amount);
            }
        }
    }

    if let Some(cards) = &spec.deck {
        builder = builder.deck(Deck::new(cards.iter().cloned()));
    }

    let game = builder
        .rounds(spec.rounds.iter().cloned())
        .uses_dice(spec.uses_dice)
        .build(store)
        .context("Invalid scenario")?;
    Ok(game)
}

/// A loaded scenario ready to be played.
pub struct Session {
    pub spec: ScenarioSpec,
    pub driver: RoundDriver,
    pub oracles: Arc<ScriptedOracles>,
}

impl Session {
    /// Loads `scenario` through `factory` and wires the umpire with the
    /// scenario's oracle script.
    pub fn load(
        factory: &ContentFactory,
        scenario: &std::path::Path,
        runtime: &RuntimeConfig,
        store: &mut dyn DocumentStore,
        human_input: impl HumanInput + 'static,
    ) -> Result<Self> {
        let spec = factory
            .load_scenario(scenario)
            .with_context(|| format!("Failed to load scenario {}", scenario.display()))?;

        let oracles = Arc::new(ScriptedOracles::new(spec.oracle.clone()));
        let manager = OracleManager::from_shared(oracles.clone());

        let game = assemble_game(
            factory,
            &spec,
            &ParticipantFactory::new(manager.clone()),
            store,
        )?;
        tracing::info!(
            rounds = game.rounds().len(),
            teams = game.team_registry().len(),
            "Scenario loaded"
        );

        let umpire =
            Umpire::new(game, manager, runtime.game_config.clone()).with_human_input(human_input);

        Ok(Self {
            spec,
            driver: RoundDriver::new(umpire),
            oracles,
        })
    }
}
