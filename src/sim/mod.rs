//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame ordering, no suspension points
//! - One seeded RNG stream, never reseeded
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::circle_hit;
pub use state::{AimCharge, Duck, Enemy, GameEvent, GameState, Scoreboard, Target};
pub use tick::{ControlState, tick};
