//! Key-value persistence behind the profile

use std::collections::HashMap;

use crate::error::ProfileError;

/// Key the settings blob is stored under
pub const SETTINGS_KEY: &str = "chromaRecallSettings";

/// Abstract key-value store (browser localStorage in production)
pub trait SettingsStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), ProfileError>;
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a settings blob
    pub fn with_settings(blob: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(SETTINGS_KEY.to_string(), blob.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ProfileError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
