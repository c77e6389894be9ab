//! One player's session: the round engine plus the profile it reports to
//!
//! Every call returns a [`Frame`] with the effects to render since the last
//! call. Stats deltas are written to the profile before the frame is built.

use game_core::{Color, Effect, EffectLog, GameRng, Phase, RoundEngine, Stats};
use profile::{ApplyOutcome, PendingSettings, Profile, ProfileError, SettingsStore};
use serde::Serialize;

use crate::sounds::SoundCue;

/// State the page needs to redraw its header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub level: u32,
    pub high_score: u32,
    pub mode_display: String,
    pub games_played: u32,
    pub average_score: f64,
}

/// Everything that happened during one call into the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub effects: Vec<Effect>,
    pub sounds: Vec<&'static str>,
    pub new_high_score: Option<u32>,
    pub snapshot: Snapshot,
}

impl Frame {
    /// Append a later frame; its snapshot wins
    pub fn merge(mut self, later: Frame) -> Frame {
        self.effects.extend(later.effects);
        self.sounds.extend(later.sounds);
        self.new_high_score = later.new_high_score.or(self.new_high_score);
        self.snapshot = later.snapshot;
        self
    }
}

pub struct Session<S: SettingsStore> {
    engine: RoundEngine<EffectLog>,
    profile: Profile<S>,
}

impl<S: SettingsStore> Session<S> {
    pub fn new(store: S, seed: u64) -> Self {
        Self {
            engine: RoundEngine::new(EffectLog::new(), GameRng::new(seed)),
            profile: Profile::load(store),
        }
    }

    /// Start a game with the current mode and difficulty
    pub fn start_game(&mut self) -> Frame {
        let config = self.profile.settings().game_config();
        if let Err(e) = self.engine.start_game(config) {
            log::error!("Could not start game: {e}");
        }
        self.flush()
    }

    pub fn press_pad(&mut self, color: Color) -> Frame {
        self.engine.submit_input(color);
        self.flush()
    }

    pub fn reset_game(&mut self) -> Frame {
        self.engine.reset_game();
        self.flush()
    }

    pub fn tick(&mut self, dt_ms: u64) -> Frame {
        self.engine.tick(dt_ms);
        self.flush()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    pub fn clock_ms(&self) -> u64 {
        self.engine.clock_ms()
    }

    pub fn apply_settings(
        &mut self,
        pending: PendingSettings,
    ) -> Result<ApplyOutcome, ProfileError> {
        let in_progress = self.engine.phase().in_progress();
        self.profile.apply_pending(pending, in_progress)
    }

    pub fn reset_stats(&mut self) -> Result<(), ProfileError> {
        self.profile.reset_stats()
    }

    pub fn profile(&self) -> &Profile<S> {
        &self.profile
    }

    pub fn engine(&self) -> &RoundEngine<EffectLog> {
        &self.engine
    }

    pub fn snapshot(&self) -> Snapshot {
        let settings = self.profile.settings();
        let stats: &Stats = &settings.stats;
        Snapshot {
            phase: self.engine.phase(),
            level: self.engine.level(),
            high_score: settings.high_score(),
            mode_display: settings.mode_display(),
            games_played: stats.games_played,
            average_score: stats.average_score(),
        }
    }

    fn flush(&mut self) -> Frame {
        let effects = self.engine.sink_mut().drain();

        let mut new_high_score = None;
        for effect in &effects {
            if let Effect::StatsUpdate { delta } = effect {
                match self.profile.record(delta) {
                    Ok(Some(score)) => new_high_score = Some(score),
                    Ok(None) => {}
                    Err(e) => log::error!("Could not save stats: {e}"),
                }
            }
        }

        let sounds = if self.profile.settings().sound_enabled {
            effects
                .iter()
                .filter_map(SoundCue::for_effect)
                .map(SoundCue::name)
                .collect()
        } else {
            Vec::new()
        };

        Frame {
            effects,
            sounds,
            new_high_score,
            snapshot: self.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Difficulty, Mode, Params, StatsDelta};
    use profile::MemoryStore;

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new(), 9)
    }

    fn run_to_turn(session: &mut Session<MemoryStore>) -> Vec<Effect> {
        let mut effects = Vec::new();
        while session.engine().phase() != Phase::AwaitingInput {
            let deadline = session.next_deadline().expect("timer pending");
            let frame = session.tick(deadline - session.clock_ms());
            effects.extend(frame.effects);
        }
        effects
    }

    fn answer(session: &Session<MemoryStore>) -> Vec<Color> {
        let mut seq = session.engine().sequence().to_vec();
        if session.engine().config().mode.is_reverse() {
            seq.reverse();
        }
        seq
    }

    fn clear_level(session: &mut Session<MemoryStore>) {
        for color in answer(session) {
            session.press_pad(color);
        }
        run_to_turn(session);
    }

    fn fail(session: &mut Session<MemoryStore>) -> Frame {
        let expected = answer(session)[session.engine().player_progress().len()];
        let wrong = [Color::Green, Color::Red, Color::Yellow, Color::Blue]
            .into_iter()
            .find(|c| *c != expected)
            .unwrap();
        session.press_pad(wrong)
    }

    #[test]
    fn test_game_start_counts_and_persists() {
        let mut session = session();
        session.start_game();
        let frame = session.tick(Params::START_DELAY_MS);

        assert!(frame.effects.contains(&Effect::StatsUpdate {
            delta: StatsDelta::GameStarted
        }));
        assert_eq!(frame.snapshot.games_played, 1);
        assert_eq!(frame.snapshot.level, 1);
        assert!(session.profile().store().writes >= 1);
    }

    #[test]
    fn test_wrong_pad_plays_error_and_records_score() {
        let mut session = session();
        session.start_game();
        run_to_turn(&mut session);
        clear_level(&mut session);
        clear_level(&mut session);

        let frame = fail(&mut session);
        assert_eq!(frame.sounds, vec!["error"]);
        assert_eq!(frame.new_high_score, Some(2));
        assert_eq!(frame.snapshot.phase, Phase::GameOver);
        assert_eq!(frame.snapshot.high_score, 2);
        assert_eq!(session.profile().settings().stats.total_score, 2);
    }

    #[test]
    fn test_sound_disabled_mutes_cues() {
        let mut session = session();
        session
            .apply_settings(PendingSettings {
                sound_enabled: Some(false),
                ..PendingSettings::new()
            })
            .unwrap();
        session.start_game();
        let frame = session.tick(Params::START_DELAY_MS);
        assert!(frame.effects.iter().any(|e| matches!(e, Effect::Flash { .. })));
        assert!(frame.sounds.is_empty());
    }

    #[test]
    fn test_playback_flash_plays_pad_sound() {
        let mut session = session();
        session.start_game();
        let frame = session.tick(Params::START_DELAY_MS);
        let first = session.engine().sequence()[0];
        assert_eq!(frame.sounds, vec![first.as_str()]);
    }

    #[test]
    fn test_mode_change_locked_during_game() {
        let mut session = session();
        session.start_game();
        let outcome = session
            .apply_settings(PendingSettings {
                mode: Some(Mode::Reverse),
                ..PendingSettings::new()
            })
            .unwrap();
        assert!(outcome.locked_out);
        assert_eq!(session.profile().settings().mode, Mode::Classic);
    }

    #[test]
    fn test_next_game_uses_new_difficulty() {
        let mut session = session();
        session
            .apply_settings(PendingSettings {
                difficulty: Some(Difficulty::Hard),
                ..PendingSettings::new()
            })
            .unwrap();
        let frame = session.start_game();
        assert_eq!(session.engine().current_speed_ms(), 500);
        assert_eq!(frame.snapshot.mode_display, "Classic Mode (Hard)");
    }

    #[test]
    fn test_reset_at_level_one_leaves_score_untouched() {
        let mut session = session();
        session.start_game();
        run_to_turn(&mut session);
        let frame = session.reset_game();

        assert!(frame.sounds.is_empty());
        let stats = &session.profile().settings().stats;
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.total_score, 0);
        assert!(stats.high_scores.is_empty());
    }

    #[test]
    fn test_merge_keeps_order_and_latest_snapshot() {
        let mut session = session();
        let first = session.start_game();
        let second = session.tick(Params::START_DELAY_MS);
        let expected: Vec<Effect> = first
            .effects
            .iter()
            .chain(&second.effects)
            .copied()
            .collect();

        let merged = first.merge(second.clone());
        assert_eq!(merged.effects, expected);
        assert_eq!(merged.snapshot, second.snapshot);
    }

    #[test]
    fn test_frame_serializes_for_page() {
        let mut session = session();
        session.start_game();
        let frame = session.tick(Params::START_DELAY_MS);
        let json: serde_json::Value = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["snapshot"]["phase"], "Playback");
        assert_eq!(json["snapshot"]["level"], 1);
        assert_eq!(json["effects"][0]["type"], "statsUpdate");
        assert_eq!(json["effects"][0]["delta"]["kind"], "gameStarted");
        assert_eq!(json["effects"][1]["type"], "levelAdvance");
        assert_eq!(json["effects"][2]["type"], "flash");
        assert_eq!(json["effects"][2]["durationMs"], 390);
    }
}
