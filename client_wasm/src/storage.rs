//! `window.localStorage` as a settings store

use profile::{ProfileError, SettingsStore};
use web_sys::Storage;

pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SettingsStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ProfileError> {
        let storage = Self::storage()
            .ok_or_else(|| ProfileError::Store("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ProfileError::Store(format!("{:?}", e)))
    }
}
