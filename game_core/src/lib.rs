//! Core rules for the Chroma Recall memory game
//!
//! Deterministic given a [`GameRng`] seed: the engine never reads a wall
//! clock and never touches the display. Hosts feed it input and elapsed
//! time and render whatever it reports through an [`EffectSink`].

pub mod config;
pub mod effects;
pub mod engine;
pub mod pads;
pub mod params;
pub mod resources;
pub mod scoring;
pub mod timers;

pub use config::*;
pub use effects::*;
pub use engine::*;
pub use pads::*;
pub use params::*;
pub use resources::*;
pub use scoring::*;
pub use timers::*;
