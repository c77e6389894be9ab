use serde::{Deserialize, Serialize};
use serde_json::Value;

use game_core::{Difficulty, GameConfig, Mode, Stats};

use crate::error::ProfileError;
use crate::merge::merge_deep;

/// Persisted user settings and lifetime stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub theme: String,
    pub stats: Stats,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Classic,
            difficulty: Difficulty::Medium,
            sound_enabled: true,
            theme: "default".to_string(),
            stats: Stats::default(),
        }
    }
}

impl Settings {
    /// Parse a stored blob, filling anything it lacks from the defaults
    pub fn from_json(blob: &str) -> Result<Self, ProfileError> {
        let stored: Value = serde_json::from_str(blob)?;
        let mut merged = serde_json::to_value(Settings::default())?;
        merge_deep(&mut merged, &stored);
        Ok(serde_json::from_value(merged)?)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Config for the next game
    pub fn game_config(&self) -> GameConfig {
        GameConfig::preset(self.mode, self.difficulty)
    }

    /// Best score for the selected mode and difficulty
    pub fn high_score(&self) -> u32 {
        self.stats.high_score(self.mode, self.difficulty)
    }

    /// Header text, e.g. "Classic Mode (Medium)"
    pub fn mode_display(&self) -> String {
        format!("{} Mode ({})", self.mode.label(), self.difficulty.label())
    }
}
