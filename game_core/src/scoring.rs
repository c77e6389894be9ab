use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{Difficulty, Mode};

/// High-score slot name, e.g. `classic_medium`
pub fn score_key(mode: Mode, difficulty: Difficulty) -> String {
    format!("{}_{}", mode.as_str(), difficulty.as_str())
}

/// Result of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub score: u32,
}

impl ScoreRecord {
    pub fn key(&self) -> String {
        score_key(self.mode, self.difficulty)
    }
}

/// Change the engine reports to whoever keeps the stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StatsDelta {
    /// First level of a game was reached
    GameStarted,
    /// A game ended with a score worth keeping
    ScoreRecorded(ScoreRecord),
}

/// Lifetime statistics for the local profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub total_score: u64,
    pub high_scores: BTreeMap<String, u32>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a delta. Returns the new high score when one was set.
    pub fn apply(&mut self, delta: &StatsDelta) -> Option<u32> {
        match delta {
            StatsDelta::GameStarted => {
                self.games_played += 1;
                None
            }
            StatsDelta::ScoreRecorded(record) => {
                self.total_score += u64::from(record.score);
                let best = self.high_scores.entry(record.key()).or_insert(0);
                if record.score > *best {
                    *best = record.score;
                    log::info!("New high score for {}: {}", record.key(), record.score);
                    Some(record.score)
                } else {
                    None
                }
            }
        }
    }

    pub fn high_score(&self, mode: Mode, difficulty: Difficulty) -> u32 {
        self.high_scores
            .get(&score_key(mode, difficulty))
            .copied()
            .unwrap_or(0)
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
