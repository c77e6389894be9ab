//! Effects the round engine asks its presentation layer to perform

use serde::Serialize;

use crate::pads::Color;
use crate::scoring::StatsDelta;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverReason {
    WrongInput,
    ManualReset,
}

/// Receiver for engine effects, called at the moment each one is decided
pub trait EffectSink {
    /// Light `color` for `duration_ms`; the sink clears it itself
    fn on_flash(&mut self, color: Color, duration_ms: u64);
    fn on_player_turn_start(&mut self, expecting_reverse: bool);
    fn on_level_advance(&mut self, level: u32);
    /// Whole sequence reproduced; next level follows after a short delay
    fn on_level_complete(&mut self, _level: u32) {}
    fn on_game_over(&mut self, final_score: u32, reason: GameOverReason);
    fn on_stats_update(&mut self, delta: StatsDelta);
}

/// One recorded effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    #[serde(rename_all = "camelCase")]
    Flash { color: Color, duration_ms: u64 },
    #[serde(rename_all = "camelCase")]
    PlayerTurnStart { expecting_reverse: bool },
    LevelAdvance { level: u32 },
    LevelComplete { level: u32 },
    #[serde(rename_all = "camelCase")]
    GameOver {
        final_score: u32,
        reason: GameOverReason,
    },
    StatsUpdate { delta: StatsDelta },
}

/// Sink that records effects in order until drained
#[derive(Debug, Clone, Default)]
pub struct EffectLog {
    pub effects: Vec<Effect>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Colors flashed so far, in order
    pub fn flashes(&self) -> Vec<Color> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Flash { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn stats_deltas(&self) -> Vec<StatsDelta> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::StatsUpdate { delta } => Some(*delta),
                _ => None,
            })
            .collect()
    }
}

impl EffectSink for EffectLog {
    fn on_flash(&mut self, color: Color, duration_ms: u64) {
        self.effects.push(Effect::Flash { color, duration_ms });
    }

    fn on_player_turn_start(&mut self, expecting_reverse: bool) {
        self.effects
            .push(Effect::PlayerTurnStart { expecting_reverse });
    }

    fn on_level_advance(&mut self, level: u32) {
        self.effects.push(Effect::LevelAdvance { level });
    }

    fn on_level_complete(&mut self, level: u32) {
        self.effects.push(Effect::LevelComplete { level });
    }

    fn on_game_over(&mut self, final_score: u32, reason: GameOverReason) {
        self.effects.push(Effect::GameOver {
            final_score,
            reason,
        });
    }

    fn on_stats_update(&mut self, delta: StatsDelta) {
        self.effects.push(Effect::StatsUpdate { delta });
    }
}
