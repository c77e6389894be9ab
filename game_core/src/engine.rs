//! Round engine
//!
//! Owns one game's progression: the sequence, the player's progress, the
//! playback speed and the phase. Time only moves when the host calls
//! [`RoundEngine::tick`] or [`RoundEngine::advance_to`]; every delayed step
//! is a timer in a single [`TimerGroup`] that is cancelled whenever a phase
//! is left.

use crate::config::{ConfigError, GameConfig};
use crate::effects::{EffectSink, GameOverReason};
use crate::pads::Color;
use crate::params::Params;
use crate::resources::{GameRng, Phase, RoundState};
use crate::scoring::{ScoreRecord, StatsDelta};
use crate::timers::{TimerGroup, TimerTask};

pub struct RoundEngine<S: EffectSink> {
    sink: S,
    rng: GameRng,
    config: GameConfig,
    state: RoundState,
    timers: TimerGroup,
    clock_ms: u64,
}

impl<S: EffectSink> RoundEngine<S> {
    pub fn new(sink: S, rng: GameRng) -> Self {
        Self {
            sink,
            rng,
            config: GameConfig::default(),
            state: RoundState::default(),
            timers: TimerGroup::new(),
            clock_ms: 0,
        }
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Begin a new game. Ignored while a game is in progress.
    ///
    /// Level 1 starts after [`Params::START_DELAY_MS`].
    pub fn start_game(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        if self.state.phase.in_progress() {
            log::debug!("start_game ignored: game already in progress");
            return Ok(());
        }
        config.validate()?;

        log::info!(
            "Starting game: mode={}, difficulty={}, speed={}ms",
            config.mode,
            config.difficulty,
            config.start_speed_ms
        );

        self.timers.cancel_all();
        self.state = RoundState::new(config.start_speed_ms);
        self.config = config;
        let first_level_at = self.clock_ms.saturating_add(Params::START_DELAY_MS);
        self.timers.schedule(first_level_at, TimerTask::AdvanceLevel);
        Ok(())
    }

    /// Player pressed a pad. Ignored unless it is the player's turn.
    pub fn submit_input(&mut self, color: Color) {
        if self.state.phase != Phase::AwaitingInput {
            log::debug!("Input {color} ignored in phase {:?}", self.state.phase);
            return;
        }
        let Some(expected) = self.state.expected_next(self.config.mode) else {
            return;
        };

        if color != expected {
            log::debug!("Wrong pad: pressed {color}, expected {expected}");
            self.game_over(GameOverReason::WrongInput);
            return;
        }

        self.state.player_progress.push(color);
        self.sink
            .on_flash(color, Params::flash_duration(self.state.current_speed_ms));

        if self.state.is_sequence_complete() {
            log::debug!("Level {} complete", self.state.level);
            self.timers.cancel_all();
            self.state.phase = Phase::LevelTransition;
            self.sink.on_level_complete(self.state.level);
            self.timers.schedule(
                self.clock_ms.saturating_add(Params::LEVEL_COMPLETE_DELAY_MS),
                TimerTask::AdvanceLevel,
            );
        }
    }

    /// Abandon the current game. Ignored when no game is running.
    pub fn reset_game(&mut self) {
        if !self.state.phase.in_progress() {
            log::debug!("reset_game ignored in phase {:?}", self.state.phase);
            return;
        }
        self.game_over(GameOverReason::ManualReset);
    }

    /// Move to the next level. Only acts during a level transition.
    pub fn advance_level(&mut self) {
        self.handle_advance_level();
        self.fire_due(self.clock_ms);
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    pub fn tick(&mut self, dt_ms: u64) {
        self.advance_to(self.clock_ms.saturating_add(dt_ms));
    }

    /// Run every timer due up to `now_ms`. Earlier times are ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms < self.clock_ms {
            return;
        }
        self.fire_due(now_ms);
        self.clock_ms = now_ms;
    }

    /// When the next timer fires, if one is pending
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn fire_due(&mut self, now_ms: u64) {
        while let Some((due_ms, task)) = self.timers.pop_due(now_ms) {
            self.clock_ms = self.clock_ms.max(due_ms);
            match task {
                TimerTask::Flash(color) => self.handle_flash(color),
                TimerTask::BeginPlayerTurn => self.handle_player_turn(),
                TimerTask::AdvanceLevel => self.handle_advance_level(),
            }
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn handle_advance_level(&mut self) {
        if self.state.phase != Phase::LevelTransition {
            log::debug!("advance_level ignored in phase {:?}", self.state.phase);
            return;
        }
        self.timers.cancel_all();

        if self.state.level == 0 {
            self.sink.on_stats_update(StatsDelta::GameStarted);
        }

        self.state.level += 1;
        let level = self.state.level;
        let color = self.rng.pick(&self.config.color_set);
        self.state.sequence.push(color);

        let speed = self
            .config
            .speed_after_advance(level, self.state.current_speed_ms);
        if speed != self.state.current_speed_ms {
            log::info!("Speed increased to {}ms after level {}", speed, level - 1);
            self.state.current_speed_ms = speed;
        }

        self.state.player_progress.clear();
        log::debug!("Level {level}: sequence length {}", self.state.sequence.len());
        self.sink.on_level_advance(level);

        self.state.phase = Phase::Playback;
        self.schedule_playback();
    }

    /// Flashes at absolute offsets `i * speed`, then the player's turn
    fn schedule_playback(&mut self) {
        let speed = self.state.current_speed_ms;
        let start = self.clock_ms;
        for (i, color) in self.state.sequence.iter().enumerate() {
            let at = start.saturating_add((i as u64).saturating_mul(speed));
            self.timers.schedule(at, TimerTask::Flash(*color));
        }
        let len = self.state.sequence.len() as u64;
        let turn_at = start
            .saturating_add(len.saturating_mul(speed))
            .saturating_add(Params::turn_lead_in(speed));
        self.timers.schedule(turn_at, TimerTask::BeginPlayerTurn);
    }

    fn handle_flash(&mut self, color: Color) {
        if self.state.phase != Phase::Playback {
            return;
        }
        self.sink
            .on_flash(color, Params::flash_duration(self.state.current_speed_ms));
    }

    fn handle_player_turn(&mut self) {
        if self.state.phase != Phase::Playback {
            return;
        }
        log::debug!("Player's turn");
        self.state.phase = Phase::AwaitingInput;
        self.sink.on_player_turn_start(self.config.mode.is_reverse());
    }

    fn game_over(&mut self, reason: GameOverReason) {
        if !self.state.phase.in_progress() {
            return;
        }
        self.timers.cancel_all();
        self.state.phase = Phase::GameOver;

        let final_score = self.state.final_score();
        log::info!("Game over ({reason:?}), score {final_score}");
        self.sink.on_game_over(final_score, reason);

        // Abandoning before clearing a level leaves no score behind
        if reason == GameOverReason::ManualReset && final_score == 0 {
            return;
        }
        self.sink.on_stats_update(StatsDelta::ScoreRecorded(ScoreRecord {
            mode: self.config.mode,
            difficulty: self.config.difficulty,
            score: final_score,
        }));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn sequence(&self) -> &[Color] {
        &self.state.sequence
    }

    pub fn player_progress(&self) -> &[Color] {
        &self.state.player_progress
    }

    pub fn current_speed_ms(&self) -> u64 {
        self.state.current_speed_ms
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
