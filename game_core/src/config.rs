use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pads::{Color, DEFAULT_COLOR_SET};
use crate::params::Params;

/// How the player must reproduce the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Classic,
    Reverse,
    Speed,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Classic, Mode::Reverse, Mode::Speed];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Reverse => "reverse",
            Mode::Speed => "speed",
        }
    }

    /// Name shown in the header
    pub fn label(self) -> &'static str {
        match self {
            Mode::Classic => "Classic",
            Mode::Reverse => "Reverse",
            Mode::Speed => "Speed Frenzy",
        }
    }

    pub fn is_reverse(self) -> bool {
        self == Mode::Reverse
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Numbers behind a difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    pub start_speed_ms: u64,
    pub speed_decrement_ms: u64,
    pub level_threshold: u32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn preset(self) -> DifficultyPreset {
        match self {
            Difficulty::Easy => DifficultyPreset {
                start_speed_ms: 800,
                speed_decrement_ms: 30,
                level_threshold: 6,
            },
            Difficulty::Medium => DifficultyPreset {
                start_speed_ms: 650,
                speed_decrement_ms: 40,
                level_threshold: 5,
            },
            Difficulty::Hard => DifficultyPreset {
                start_speed_ms: 500,
                speed_decrement_ms: 50,
                level_threshold: 4,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a config is refused by `RoundEngine::start_game`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("start speed must be greater than zero")]
    ZeroStartSpeed,
    #[error("minimum speed must be greater than zero")]
    ZeroMinSpeed,
    #[error("minimum speed {0}ms is below the {floor}ms floor", floor = Params::MIN_SPEED_MS)]
    MinSpeedBelowFloor(u64),
    #[error("start speed {start}ms is faster than the minimum speed {min}ms")]
    StartSpeedBelowMin { start: u64, min: u64 },
    #[error("start speed {0}ms is slower than the {max}ms limit", max = Params::MAX_SPEED_MS)]
    StartSpeedTooLarge(u64),
    #[error("level threshold must be greater than zero")]
    ZeroLevelThreshold,
    #[error("color set contains {0} more than once")]
    DuplicateColor(Color),
}

/// Settings for one game. Read-only once the game has started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub start_speed_ms: u64,
    pub speed_decrement_ms: u64,
    pub level_threshold: u32,
    pub min_speed_ms: u64,
    pub mode: Mode,
    /// High-score slot label; the numbers above need not match the preset
    pub difficulty: Difficulty,
    pub color_set: [Color; 4],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(Mode::default(), Difficulty::default())
    }
}

impl GameConfig {
    /// Standard config for a mode and difficulty
    pub fn preset(mode: Mode, difficulty: Difficulty) -> Self {
        let preset = difficulty.preset();
        Self {
            start_speed_ms: preset.start_speed_ms,
            speed_decrement_ms: preset.speed_decrement_ms,
            level_threshold: preset.level_threshold,
            min_speed_ms: Params::MIN_SPEED_MS,
            mode,
            difficulty,
            color_set: DEFAULT_COLOR_SET,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_speed_ms == 0 {
            return Err(ConfigError::ZeroStartSpeed);
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroMinSpeed);
        }
        if self.min_speed_ms < Params::MIN_SPEED_MS {
            return Err(ConfigError::MinSpeedBelowFloor(self.min_speed_ms));
        }
        if self.start_speed_ms < self.min_speed_ms {
            return Err(ConfigError::StartSpeedBelowMin {
                start: self.start_speed_ms,
                min: self.min_speed_ms,
            });
        }
        if self.start_speed_ms > Params::MAX_SPEED_MS {
            return Err(ConfigError::StartSpeedTooLarge(self.start_speed_ms));
        }
        if self.level_threshold == 0 {
            return Err(ConfigError::ZeroLevelThreshold);
        }
        for (i, color) in self.color_set.iter().enumerate() {
            if self.color_set[..i].contains(color) {
                return Err(ConfigError::DuplicateColor(*color));
            }
        }
        Ok(())
    }

    /// Speed to use once `level` has been reached.
    ///
    /// Steps down every `level_threshold` cleared levels and never goes
    /// below `min_speed_ms`.
    pub fn speed_after_advance(&self, level: u32, current_ms: u64) -> u64 {
        if level > 1 && (level - 1) % self.level_threshold == 0 && current_ms > self.min_speed_ms {
            current_ms
                .saturating_sub(self.speed_decrement_ms)
                .max(self.min_speed_ms)
        } else {
            current_ms
        }
    }
}
