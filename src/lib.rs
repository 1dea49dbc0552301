//! Duck Hop - a charge-and-launch arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aim/charge, ballistics, targets, enemies)
//! - `assets`: Mesh blob loading and named mesh lookup
//! - `scene`: Per-frame draw list handed to the renderer
//! - `input`: Key event to control-state mapping
//! - `config`: Gameplay tuning injected at construction

pub mod assets;
pub mod config;
pub mod input;
pub mod scene;
pub mod sim;

pub use config::Tuning;

/// Game configuration constants
pub mod consts {
    /// Gravity acceleration (world units per second squared)
    pub const GRAVITY: f32 = -4.9;
    /// Cursor angle lower bound (degrees)
    pub const ANGLE_MIN: i32 = -90;
    /// Cursor angle upper bound (degrees)
    pub const ANGLE_MAX: i32 = 90;
    /// Charge meter step per processed frame (triangle wave, not time-scaled)
    pub const CHARGE_STEP: f32 = 0.1;
    /// Divisor turning the integer cursor angle into horizontal launch speed
    pub const ANGLE_TO_VX: f32 = 30.0;
    /// Vertical launch speed per unit of charge power
    pub const POWER_TO_VY: f32 = 2.5;
    /// Horizontal restitution when bouncing off a board wall
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Forced descent speed once the duck rises past the ceiling
    pub const CEILING_VY: f32 = -2.0;
    /// Height below which a flight counts as landed
    pub const LANDING_EPS: f32 = 0.01;
}

/// Clamp a frame's elapsed time to something the integrator accepts.
///
/// There is no error channel out of `tick`, so a non-finite or negative
/// elapsed value degrades to a zero-length frame.
#[inline]
pub fn clamp_elapsed(elapsed: f32) -> f32 {
    if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 }
}
