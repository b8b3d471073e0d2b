use serde::{Deserialize, Serialize};

/// Fixed key the game state is persisted under.
pub const STORAGE_KEY: &str = "pyquest-game-state";

/// Host-tunable progress settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressConfig {
    /// Storage key for the serialized [`GameState`](crate::GameState).
    pub storage_key: String,
    /// Bonus XP per streak day on daily challenges.
    pub streak_bonus_per_day: u32,
    /// Upper bound on the streak bonus.
    pub streak_bonus_cap: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            streak_bonus_per_day: 5,
            streak_bonus_cap: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ProgressConfig = serde_json::from_str(r#"{"streakBonusCap": 20}"#).unwrap();
        assert_eq!(config.streak_bonus_cap, 20);
        assert_eq!(config.streak_bonus_per_day, 5);
        assert_eq!(config.storage_key, STORAGE_KEY);
    }
}
