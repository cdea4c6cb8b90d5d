//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame steps only (one `update` per frame, no wall clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the injected score store

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Fate, SweepOutcome, classify, sweep};
pub use spawn::SpawnScheduler;
pub use state::{BallColor, Faller, FallerKind, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
