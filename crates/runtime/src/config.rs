//! Runtime configuration and its environment loader.
use std::env;

use wargame_core::GameConfig;

/// Runtime configuration shared by the umpire, agents and driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
}

impl RuntimeConfig {
    pub const fn new(game_config: GameConfig) -> Self {
        Self { game_config }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARGAME_MAX_ATTEMPTS` - Umpire legality attempts per turn (default: 5)
    /// - `WARGAME_AGENT_ATTEMPTS` - In-character attempts per agent request (default: 5)
    /// - `WARGAME_LOWEST_FACE` - Lowest face of every die (default: 1)
    /// - `WARGAME_SEED` - Base seed for dice and card draws
    pub fn from_env() -> Self {
        Self::default().overlay(|key| env::var(key).ok())
    }

    /// Applies every variable `lookup` knows about on top of `self`.
    ///
    /// Unparsable values are ignored and leave the current setting in place.
    /// Attempt counts and the lowest face are clamped to at least 1.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut game = self.game_config;

        if let Some(attempts) = read_var::<u32>(&lookup, "WARGAME_MAX_ATTEMPTS") {
            game = game.with_max_attempts(attempts);
        }
        if let Some(attempts) = read_var::<u32>(&lookup, "WARGAME_AGENT_ATTEMPTS") {
            game = game.with_agent_attempts(attempts);
        }
        if let Some(face) = read_var::<u32>(&lookup, "WARGAME_LOWEST_FACE") {
            game = game.with_lowest_face(face);
        }
        if let Some(seed) = read_var::<u64>(&lookup, "WARGAME_SEED") {
            game = game.with_seed(seed);
        }

        self.game_config = game;
        self
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
