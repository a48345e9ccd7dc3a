//! Content factory resolving scenario files against a data directory.

use std::path::{Path, PathBuf};

use wargame_core::GameConfig;

use crate::loaders::{
    ConfigLoader, LoadResult, ParticipantSpec, RulesSpec, ScenarioLoader, ScenarioSpec, read_file,
};

/// Content factory that loads scenarios and their documents from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── scenarios/
/// │   └── strait.ron
/// ├── rules/
/// │   └── strait.txt
/// └── biographies/
///     └── minister.txt
/// ```
///
/// Relative paths inside a scenario are resolved against `data_dir`.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves `path` against the data directory unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// Load game configuration from `config.toml`, defaulting when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    pub fn load_scenario(&self, path: impl AsRef<Path>) -> LoadResult<ScenarioSpec> {
        ScenarioLoader::load(&self.resolve(path.as_ref()))
    }

    /// Returns the rule text, reading the rules document when one is named.
    pub fn rules_text(&self, rules: &RulesSpec) -> LoadResult<String> {
        match (&rules.text, &rules.document) {
            (Some(text), None) => Ok(text.clone()),
            (None, Some(document)) => read_file(&self.resolve(document)),
            (Some(_), Some(_)) => Err(anyhow::anyhow!(
                "Scenario rules must be given as text or as a document, not both"
            )),
            (None, None) => Err(anyhow::anyhow!("Scenario does not define any rules")),
        }
    }

    /// Returns the biography document text for participants defined by file.
    pub fn biography_text(&self, participant: &ParticipantSpec) -> LoadResult<Option<String>> {
        participant
            .biography_file
            .as_deref()
            .map(|path| read_file(&self.resolve(path)))
            .transpose()
    }
}
