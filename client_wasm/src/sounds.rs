//! Which sound the page should play for an effect

use game_core::{Color, Effect, GameOverReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Pad(Color),
    Error,
    LevelUp,
}

impl SoundCue {
    pub fn for_effect(effect: &Effect) -> Option<Self> {
        match effect {
            Effect::Flash { color, .. } => Some(SoundCue::Pad(*color)),
            Effect::LevelComplete { .. } => Some(SoundCue::LevelUp),
            Effect::GameOver {
                reason: GameOverReason::WrongInput,
                ..
            } => Some(SoundCue::Error),
            _ => None,
        }
    }

    /// Name of the loaded sound buffer
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Pad(color) => color.as_str(),
            SoundCue::Error => "error",
            SoundCue::LevelUp => "levelup",
        }
    }
}
