/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Attempts the umpire grants each turn before giving up on legality.
    pub max_attempts: u32,
    /// Attempts an AI participant gets to produce an in-character action.
    pub agent_attempts: u32,
    /// Lowest face on every die the umpire rolls. Never below 1.
    pub lowest_face: u32,
    /// Base seed for dice rolls and card draws.
    pub seed: u64,
}

impl GameConfig {
    /// Sentinel turn target meaning the umpire acts itself.
    pub const UMPIRE: &'static str = "Umpire";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    pub const DEFAULT_AGENT_ATTEMPTS: u32 = 5;
    pub const DEFAULT_LOWEST_FACE: u32 = 1;
    pub const DEFAULT_SEED: u64 = 0x5eed_0f_3a7e;

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            agent_attempts: Self::DEFAULT_AGENT_ATTEMPTS,
            lowest_face: Self::DEFAULT_LOWEST_FACE,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_agent_attempts(mut self, agent_attempts: u32) -> Self {
        self.agent_attempts = agent_attempts.max(1);
        self
    }

    pub fn with_lowest_face(mut self, lowest_face: u32) -> Self {
        self.lowest_face = lowest_face.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_clamp_to_one() {
        let config = GameConfig::new()
            .with_max_attempts(0)
            .with_agent_attempts(0)
            .with_lowest_face(0);
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.agent_attempts, 1);
        assert_eq!(config.lowest_face, 1);
        assert_eq!(GameConfig::new().with_lowest_face(3).lowest_face, 3);
    }
}
