//! Gameplay tuning
//!
//! Board geometry and balance values are injected into `GameState` at
//! construction instead of read from ambient globals, so tests can shrink
//! the world and two simulations can disagree about it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tuning values shared by every component of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Board extent in tiles, x axis
    pub board_width: u32,
    /// Board extent in tiles, y axis
    pub board_height: u32,
    /// Active targets kept in play at all times
    pub target_count: usize,
    /// Collision radius shared by target and enemy overlap tests
    pub min_radius: f32,
    /// Enemy convergence scale; each axis closes 1/(400 x speed) of the
    /// remaining gap per frame
    pub enemy_speed: f32,
    /// Charge meter upper bound
    pub max_power: f32,
    /// Height above which ascent is forced back down
    pub ceiling: f32,
    /// Where new enemies enter the board
    pub enemy_origin: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: 5,
            board_height: 4,
            target_count: 7,
            min_radius: 0.3,
            enemy_speed: 1.0,
            max_power: 2.5,
            ceiling: 3.6,
            enemy_origin: Vec2::new(0.0, 3.0),
        }
    }
}

impl Tuning {
    /// Left wall: half a tile past the board edge.
    #[inline]
    pub fn wall_min_x(&self) -> f32 {
        -0.5
    }

    /// Right wall: half a tile past the board edge.
    #[inline]
    pub fn wall_max_x(&self) -> f32 {
        self.board_width as f32 + 0.5
    }

    /// Per-frame smoothing divisor for enemy homing.
    #[inline]
    pub fn enemy_smoothing(&self) -> f32 {
        400.0 * self.enemy_speed
    }
}
