//! Wargame client binary.
//!
//! Loads a scenario, plays every round with the scenario's scripted oracles
//! and a human at the terminal, then prints the summary and winner.
//!
//! ```bash
//! # Scenario path relative to WARGAME_DATA_DIR, or absolute
//! cargo run -p wargame-client -- scenarios/strait.ron
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use wargame_client::{ClientConfig, Session, config, logging};
use wargame_content::ContentFactory;
use wargame_runtime::{FileDocumentStore, RoundDriver, RuntimeConfig, StdinInput, TurnOutcome};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Configuration: environment first, then an optional scenario argument
    let mut client_config = ClientConfig::from_env();
    if let Some(scenario) = std::env::args().nth(1) {
        client_config.scenario = PathBuf::from(scenario);
    }

    // 2. Logging
    let session_id = logging::session_id(client_config.session_id.as_deref());
    let log_file = logging::setup_logging(&config::default_log_dir(), &session_id)?;

    tracing::info!("Starting wargame client");
    tracing::info!("Data directory: {}", client_config.data_dir.display());

    // 3. Game settings: data-dir config.toml overlaid with WARGAME_* variables
    let factory = ContentFactory::new(&client_config.data_dir);
    let runtime_config =
        RuntimeConfig::new(factory.load_config()?).overlay(|key| std::env::var(key).ok());

    // 4. Session
    let mut store = FileDocumentStore::new(client_config.documents_dir(&session_id))
        .context("Failed to open document store")?;
    let mut session = Session::load(
        &factory,
        &client_config.scenario,
        &runtime_config,
        &mut store,
        StdinInput,
    )?;

    if let Some(name) = &session.spec.name {
        println!("== {name} ==");
    }
    if !session.spec.briefing.is_empty() {
        println!("{}\n", session.spec.briefing);
    }

    // 5. Rounds
    play(&mut session.driver)?;

    // 6. Reports
    let umpire = session.driver.umpire();
    println!("\n== Summary ==\n{}", umpire.produce_summary()?);
    let verdict = umpire.deduce_winner()?;
    match (verdict.team, verdict.player) {
        (Some(team), Some(player)) => println!("Winner: {player} ({team})"),
        (Some(team), None) => println!("Winning team: {team}"),
        (None, Some(player)) => println!("Winner: {player}"),
        (None, None) => println!("No winner declared"),
    }

    tracing::info!("Session complete, log at {}", log_file.display());
    Ok(())
}

fn play(driver: &mut RoundDriver) -> Result<()> {
    while !driver.is_done() {
        let index = driver.cursor();
        let Some(results) = driver
            .advance_one_round()
            .with_context(|| format!("Round {} failed", index + 1))?
        else {
            break;
        };

        println!("-- Round {} --", index + 1);
        let round = &driver.umpire().game().rounds()[index];
        for (turn, outcome) in &results {
            let target = round
                .turns()
                .get(*turn)
                .map(|turn| turn.target.as_str())
                .unwrap_or_default();
            match outcome {
                TurnOutcome::Accepted(action) => println!("{target}: {action}"),
                TurnOutcome::NoValidAction => println!("{target}: (no valid action)"),
            }
        }
    }
    Ok(())
}
