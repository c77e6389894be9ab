//! JavaScript bindings
//!
//! The page owns the DOM, audio and timers. It forwards clicks here, arms a
//! single `setTimeout` for `next_deadline()`, and renders each returned
//! frame (a JSON string).

use profile::PendingSettings;
use wasm_bindgen::prelude::*;

use crate::input::{difficulty_from_select, mode_from_select, pad_color};
use crate::session::{Frame, Session};
use crate::storage::LocalStorageStore;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("Initializing Chroma Recall...");
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize frame: {}", e)))
}

#[wasm_bindgen]
pub struct ChromaRecall {
    session: Session<LocalStorageStore>,
    started_at: f64,
}

#[wasm_bindgen]
impl ChromaRecall {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChromaRecall {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self {
            session: Session::new(LocalStorageStore, seed),
            started_at: js_sys::Date::now(),
        }
    }

    pub fn start_game(&mut self) -> Result<String, JsValue> {
        let frame = self.sync_clock().merge(self.session.start_game());
        to_json(&frame)
    }

    /// Pad click; `color` is the pad's `data-color`
    pub fn press_pad(&mut self, color: &str) -> Result<String, JsValue> {
        let color = pad_color(color)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown pad: {}", color)))?;
        let frame = self.sync_clock().merge(self.session.press_pad(color));
        to_json(&frame)
    }

    pub fn reset_game(&mut self) -> Result<String, JsValue> {
        let frame = self.sync_clock().merge(self.session.reset_game());
        to_json(&frame)
    }

    /// Called from the page's timeout; fires whatever is due
    pub fn tick(&mut self) -> Result<String, JsValue> {
        let frame = self.sync_clock();
        to_json(&frame)
    }

    /// Milliseconds until the next timer, if one is pending
    pub fn ms_until_next(&self) -> Option<f64> {
        let deadline = self.session.next_deadline()? as f64;
        Some((deadline - self.session.clock_ms() as f64).max(0.0))
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.session.snapshot())
    }

    pub fn settings(&self) -> Result<String, JsValue> {
        to_json(self.session.profile().settings())
    }

    /// Apply the settings dialog; empty strings mean "unchanged"
    pub fn apply_settings(
        &mut self,
        mode: &str,
        difficulty: &str,
        theme: &str,
        sound_enabled: Option<bool>,
    ) -> Result<bool, JsValue> {
        let pending = PendingSettings {
            mode: mode_from_select(mode),
            difficulty: difficulty_from_select(difficulty),
            theme: (!theme.is_empty()).then(|| theme.to_string()),
            sound_enabled,
        };
        let outcome = self
            .session
            .apply_settings(pending)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(outcome.requires_restart)
    }

    pub fn reset_stats(&mut self) -> Result<(), JsValue> {
        self.session
            .reset_stats()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl ChromaRecall {
    /// Move the engine clock to wall time since construction
    fn sync_clock(&mut self) -> Frame {
        let elapsed = (js_sys::Date::now() - self.started_at).max(0.0) as u64;
        let dt = elapsed.saturating_sub(self.session.clock_ms());
        self.session.tick(dt)
    }
}

impl Default for ChromaRecall {
    fn default() -> Self {
        Self::new()
    }
}
