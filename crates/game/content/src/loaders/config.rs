//! Game configuration loader.

use std::path::Path;

use wargame_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for `GameConfig` from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses a TOML file; fields that are absent keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        // Zero attempts would fail every turn; a zero face would roll zeros.
        let (max_attempts, agent_attempts, lowest_face) =
            (config.max_attempts, config.agent_attempts, config.lowest_face);
        Ok(config
            .with_max_attempts(max_attempts)
            .with_agent_attempts(agent_attempts)
            .with_lowest_face(lowest_face))
    }

    /// Like [`ConfigLoader::load`] but falls back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(GameConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_attempts = 2\nseed = 7\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.seed, 7);
        assert_eq!(config.agent_attempts, GameConfig::DEFAULT_AGENT_ATTEMPTS);
    }

    #[test]
    fn zero_attempts_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_attempts = 0\nlowest_face = 0\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.lowest_face, 1);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
