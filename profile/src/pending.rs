//! Settings edits held back until the player confirms them

use game_core::{Difficulty, Mode};

use crate::settings::Settings;

/// Unconfirmed edits from the settings dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSettings {
    pub mode: Option<Mode>,
    pub difficulty: Option<Difficulty>,
    pub theme: Option<String>,
    pub sound_enabled: Option<bool>,
}

/// What applying a draft changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub changed: bool,
    /// Mode or difficulty changed; takes effect next game
    pub requires_restart: bool,
    /// Mode or difficulty edits were dropped because a game is running
    pub locked_out: bool,
}

impl PendingSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flip sound relative to whatever is pending or current
    pub fn toggle_sound(&mut self, current: &Settings) {
        let now = self.sound_enabled.unwrap_or(current.sound_enabled);
        self.sound_enabled = Some(!now);
    }

    /// Write changed fields into `settings`
    pub fn apply_to(self, settings: &mut Settings, game_in_progress: bool) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();

        if let Some(theme) = self.theme {
            if theme != settings.theme {
                settings.theme = theme;
                outcome.changed = true;
            }
        }

        if let Some(sound) = self.sound_enabled {
            if sound != settings.sound_enabled {
                settings.sound_enabled = sound;
                outcome.changed = true;
            }
        }

        let mode = self.mode.filter(|m| *m != settings.mode);
        let difficulty = self.difficulty.filter(|d| *d != settings.difficulty);
        if game_in_progress {
            outcome.locked_out = mode.is_some() || difficulty.is_some();
        } else {
            if let Some(mode) = mode {
                settings.mode = mode;
                outcome.changed = true;
                outcome.requires_restart = true;
            }
            if let Some(difficulty) = difficulty {
                settings.difficulty = difficulty;
                outcome.changed = true;
                outcome.requires_restart = true;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_changes_nothing() {
        let mut settings = Settings::default();
        let outcome = PendingSettings::new().apply_to(&mut settings, false);
        assert_eq!(outcome, ApplyOutcome::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_same_values_are_not_changes() {
        let mut settings = Settings::default();
        let draft = PendingSettings {
            mode: Some(Mode::Classic),
            theme: Some("default".to_string()),
            ..PendingSettings::new()
        };
        assert!(!draft.apply_to(&mut settings, false).changed);
    }

    #[test]
    fn test_mode_change_requires_restart() {
        let mut settings = Settings::default();
        let draft = PendingSettings {
            mode: Some(Mode::Speed),
            difficulty: Some(Difficulty::Hard),
            ..PendingSettings::new()
        };
        let outcome = draft.apply_to(&mut settings, false);
        assert!(outcome.changed);
        assert!(outcome.requires_restart);
        assert_eq!(settings.mode, Mode::Speed);
        assert_eq!(settings.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_mode_locked_during_game_but_theme_applies() {
        let mut settings = Settings::default();
        let draft = PendingSettings {
            mode: Some(Mode::Reverse),
            theme: Some("dark".to_string()),
            ..PendingSettings::new()
        };
        let outcome = draft.apply_to(&mut settings, true);
        assert!(outcome.changed);
        assert!(outcome.locked_out);
        assert!(!outcome.requires_restart);
        assert_eq!(settings.mode, Mode::Classic);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_toggle_sound_twice_restores() {
        let settings = Settings::default();
        let mut draft = PendingSettings::new();
        draft.toggle_sound(&settings);
        assert_eq!(draft.sound_enabled, Some(false));
        draft.toggle_sound(&settings);
        assert_eq!(draft.sound_enabled, Some(true));
    }
}
