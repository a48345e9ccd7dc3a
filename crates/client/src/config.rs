//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to locate a scenario and this run's files.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Scenario file, relative to `data_dir` unless absolute.
    pub scenario: PathBuf,
    pub session_id: Option<String>,
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario: PathBuf::from(Self::DEFAULT_SCENARIO),
            session_id: None,
            data_dir: default_data_dir(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_SCENARIO: &'static str = "scenarios/strait.ron";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARGAME_SCENARIO` - Scenario file (default: `scenarios/strait.ron`)
    /// - `WARGAME_SESSION_ID` - Session identifier for logs and documents (default: auto-generated)
    /// - `WARGAME_DATA_DIR` - Directory holding scenarios and documents (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(scenario) = read_env("WARGAME_SCENARIO") {
            config.scenario = scenario;
        }
        config.session_id = env::var("WARGAME_SESSION_ID").ok();
        if let Some(data_dir) = read_env("WARGAME_DATA_DIR") {
            config.data_dir = data_dir;
        }

        config
    }

    /// Directory where this session's rule and biography documents are written.
    pub fn documents_dir(&self, session_id: &str) -> PathBuf {
        self.data_dir.join("documents").join(session_id)
    }
}

/// Platform data directory for wargame, or `./data` when none is known.
///
/// - macOS: `~/Library/Application Support/wargame`
/// - Linux: `~/.local/share/wargame` (or `$XDG_DATA_HOME/wargame`)
/// - Windows: `%APPDATA%\wargame`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wargame")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Platform cache directory for wargame logs.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wargame")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/wargame"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
