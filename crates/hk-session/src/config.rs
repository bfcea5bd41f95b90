//! Configuration for a game session.

use hk_mechanics::DEFAULT_BOSS_HP_THRESHOLD;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Enemies whose base max HP exceeds this are never scaled.
    pub boss_hp_threshold: i32,
    /// How many log entries a save keeps.
    pub history_limit: usize,
    /// Maximum length of the player's display name.
    pub name_max_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            boss_hp_threshold: DEFAULT_BOSS_HP_THRESHOLD,
            history_limit: 50,
            name_max_len: 15,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the boss HP threshold.
    pub fn with_boss_threshold(mut self, threshold: i32) -> Self {
        self.boss_hp_threshold = threshold;
        self
    }

    /// Set how many log entries a save keeps.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the maximum name length (at least 1).
    pub fn with_name_max_len(mut self, len: usize) -> Self {
        self.name_max_len = len.max(1);
        self
    }
}
