//! Browser front end for Chroma Recall
//!
//! [`Session`] is plain Rust and testable on the host; the `wasm_bindgen`
//! surface and the localStorage store only exist on wasm32.

pub mod input;
pub mod session;
pub mod sounds;

#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod web;

pub use session::{Frame, Session, Snapshot};
pub use sounds::SoundCue;
