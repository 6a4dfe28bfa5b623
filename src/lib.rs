//! Deterministic, headless grid Snake engine.
//!
//! The [`Engine`] owns the game state and advances it one cell per
//! [`Engine::tick`]. Rendering, timing and input devices live in the host;
//! randomness is injected through [`RandomSource`] so runs can be replayed.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod input;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use config::{EngineConfig, GridSize};
pub use engine::{Collision, Engine};
pub use error::ConfigError;
pub use input::{Direction, DirectionVector};
pub use rng::{RandomSource, RngSource};
pub use snake::Position;
pub use snapshot::Snapshot;
