use game_core::StatsDelta;

use crate::error::ProfileError;
use crate::pending::{ApplyOutcome, PendingSettings};
use crate::settings::Settings;
use crate::store::{SettingsStore, SETTINGS_KEY};

/// The single local profile: settings in memory, mirrored to a store
pub struct Profile<S: SettingsStore> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> Profile<S> {
    /// Load from `store`. A damaged blob is replaced by the defaults.
    pub fn load(store: S) -> Self {
        let mut profile = Self {
            store,
            settings: Settings::default(),
        };

        match profile.store.load(SETTINGS_KEY) {
            None => log::info!("No saved settings found, using defaults"),
            Some(blob) => match Settings::from_json(&blob) {
                Ok(settings) => {
                    log::debug!("Settings loaded: {}", settings.mode_display());
                    profile.settings = settings;
                }
                Err(e) => {
                    log::warn!("Could not parse saved settings, using defaults: {e}");
                    if let Err(e) = profile.save() {
                        log::error!("Could not save default settings: {e}");
                    }
                }
            },
        }

        profile
    }

    pub fn save(&mut self) -> Result<(), ProfileError> {
        let blob = self.settings.to_json()?;
        self.store.save(SETTINGS_KEY, &blob)
    }

    /// Apply a stats delta and persist it. Returns a new high score if set.
    pub fn record(&mut self, delta: &StatsDelta) -> Result<Option<u32>, ProfileError> {
        let new_high = self.settings.stats.apply(delta);
        self.save()?;
        Ok(new_high)
    }

    /// Apply a settings draft, saving when anything changed
    pub fn apply_pending(
        &mut self,
        pending: PendingSettings,
        game_in_progress: bool,
    ) -> Result<ApplyOutcome, ProfileError> {
        let outcome = pending.apply_to(&mut self.settings, game_in_progress);
        if outcome.changed {
            self.save()?;
        }
        Ok(outcome)
    }

    pub fn reset_stats(&mut self) -> Result<(), ProfileError> {
        self.settings.stats.reset();
        log::info!("Stats reset");
        self.save()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
