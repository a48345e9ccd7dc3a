//! Scenario loader.
//!
//! A scenario bundles everything a game needs before the first round: rules,
//! the round plan, teams, dice/deck usage, starting resources and the oracle
//! script. Files are RON or TOML, picked by extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wargame_core::{Biography, Round};

use crate::loaders::{LoadResult, read_file};
use crate::scripted::OracleScript;

/// Where the rule set comes from. Exactly one of the two must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesSpec {
    pub text: Option<String>,
    /// Text file holding the rules, relative to the data directory.
    pub document: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantSpec {
    pub name: Option<String>,
    pub is_human: bool,
    pub biography: Option<Biography>,
    /// Free-form biography text file, relative to the data directory.
    pub biography_file: Option<PathBuf>,
}

/// team -> participant name -> resource -> starting amount
pub type ResourceTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, i64>>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSpec {
    pub name: Option<String>,
    /// Opening situation shown to the players before the first round.
    pub briefing: String,
    pub rules: RulesSpec,
    pub rounds: Vec<Round>,
    pub teams: BTreeMap<String, Vec<ParticipantSpec>>,
    pub uses_dice: bool,
    pub deck: Option<Vec<String>>,
    pub resources: ResourceTable,
    pub oracle: OracleScript,
}

impl ScenarioSpec {
    /// Total number of turns across all rounds.
    pub fn turn_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }
}

/// Loader for scenario files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Loads a scenario; `.toml` files are parsed as TOML, everything else as RON.
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_ron(&content)
        }
    }

    pub fn from_ron(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    pub fn from_toml(content: &str) -> LoadResult<ScenarioSpec> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e))
    }
}
