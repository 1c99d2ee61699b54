//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Exactly one tick per rendered frame, single mutator
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod platforms;
pub mod player;
pub mod state;
pub mod tick;

pub use platforms::{Platform, PlatformField};
pub use player::Player;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
