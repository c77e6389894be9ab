//! Local player profile
//!
//! Settings and stats persisted as one JSON blob in a key-value store.
//! Whatever the stored blob lacks is filled from the defaults, so callers
//! always see a complete [`Settings`].

pub mod error;
pub mod merge;
pub mod pending;
pub mod profile;
pub mod settings;
pub mod store;

pub use error::ProfileError;
pub use merge::merge_deep;
pub use pending::{ApplyOutcome, PendingSettings};
pub use profile::Profile;
pub use settings::Settings;
pub use store::{MemoryStore, SettingsStore, SETTINGS_KEY};
