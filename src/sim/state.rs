//! Game state and core simulation types
//!
//! Invariant-carrying fields are crate-private; the renderer and any other
//! consumer read through accessors and can never edit the score or the aim
//! bounds out from under the simulation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::consts::*;
use crate::sim::collision::outside_walls;

/// Events raised by a simulation tick, drained by the shell after `tick`
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The duck left the ground with the given velocity
    Launched { velocity: Vec2 },
    /// Flight ended; the duck is grounded and re-chargeable
    Landed { x: f32 },
    /// A target was consumed; `score` is the new total
    TargetHit { position: Vec2, score: u32 },
    /// Score crossed a 10-point milestone and one enemy joined the board
    EnemySpawned { count: usize },
    /// An enemy overlaps the duck this frame; the consequence is the
    /// caller's policy, the simulation itself changes nothing
    EnemyContact { position: Vec2 },
}

/// Aim cursor and charge meter
///
/// The cursor is an integer degree counter in [-90, 90]. The charge meter is
/// a triangle wave: one fixed step per processed frame, ping-ponging between
/// 0 and `max_power`. Both are edited mutually exclusively within a frame,
/// priority left > right > charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimCharge {
    pub(crate) angle_deg: i32,
    pub(crate) power: f32,
    pub(crate) increasing: bool,
    /// Charge key state from the previous frame, for release detection
    pub(crate) charge_held: bool,
    /// Whether any aim/charge key was held last frame (drives the cursor
    /// indicator in the draw list)
    pub(crate) active: bool,
}

impl Default for AimCharge {
    fn default() -> Self {
        Self {
            angle_deg: 0,
            power: 0.0,
            increasing: true,
            charge_held: false,
            active: false,
        }
    }
}

impl AimCharge {
    /// Cursor angle in whole degrees, always within [-90, 90].
    pub fn angle_deg(&self) -> i32 {
        self.angle_deg
    }

    /// Charge meter value, always within [0, max_power].
    pub fn power(&self) -> f32 {
        self.power
    }

    /// True while the player is steering or charging.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn steer_left(&mut self) {
        if self.angle_deg > ANGLE_MIN {
            self.angle_deg -= 1;
        }
    }

    pub(crate) fn steer_right(&mut self) {
        if self.angle_deg < ANGLE_MAX {
            self.angle_deg += 1;
        }
    }

    /// One triangle-wave step of the charge meter.
    pub(crate) fn advance_charge(&mut self, max_power: f32) {
        if self.increasing {
            self.power = (self.power + CHARGE_STEP).min(max_power);
            if self.power >= max_power {
                self.increasing = false;
            }
        } else {
            self.power = (self.power - CHARGE_STEP).max(0.0);
            if self.power <= 0.0 {
                self.increasing = true;
            }
        }
    }

    /// Velocity the duck gets when the charge key is released.
    pub(crate) fn launch_velocity(&self) -> Vec2 {
        Vec2::new(
            self.angle_deg as f32 / ANGLE_TO_VX,
            POWER_TO_VY * self.power,
        )
    }

    pub(crate) fn reset_power(&mut self) {
        self.power = 0.0;
    }
}

/// The player's duck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Duck {
    pub(crate) x: f32,
    pub(crate) height: f32,
    pub(crate) velocity: Vec2,
    pub(crate) jumping: bool,
}

impl Duck {
    /// Current position as (x, height). Height is never negative.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.height)
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_airborne(&self) -> bool {
        self.jumping
    }

    pub(crate) fn launch(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.jumping = true;
    }

    /// One gravity step. Returns true on the frame the duck lands.
    pub(crate) fn integrate(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.height += dt * (self.velocity.y + dt * GRAVITY);
        self.x += dt * self.velocity.x;
        self.velocity.y += dt * GRAVITY;

        if outside_walls(self.x, tuning.wall_min_x(), tuning.wall_max_x()) {
            self.velocity.x *= -WALL_RESTITUTION;
        }
        if self.height > tuning.ceiling {
            self.velocity.y = CEILING_VY;
        }
        if self.height < LANDING_EPS {
            self.height = 0.0;
            self.velocity.x = 0.0;
            self.jumping = false;
            return true;
        }
        false
    }
}

/// A static circular goal; position is fixed for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub(crate) position: Vec2,
}

impl Target {
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// A homing hazard. Enemies are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub(crate) position: Vec2,
}

impl Enemy {
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Exponential smoothing toward `goal`: each axis closes 1/smoothing of
    /// the remaining gap, so the enemy converges without ever arriving.
    pub(crate) fn advance(&mut self, goal: Vec2, smoothing: f32) {
        self.position += (goal - self.position) / smoothing;
    }
}

/// Monotonic score counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub(crate) score: u32,
}

impl Scoreboard {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Count one consumed target. Returns the new total.
    pub(crate) fn award(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Base-10 digits of the score, least significant first. Always yields
    /// at least one digit.
    pub fn digits(&self) -> impl Iterator<Item = usize> {
        let mut remainder = Some(self.score);
        std::iter::from_fn(move || {
            let value = remainder?;
            remainder = if value >= 10 { Some(value / 10) } else { None };
            Some((value % 10) as usize)
        })
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    seed: u64,
    /// The one RNG stream. Seeded once at construction, never reseeded;
    /// every target spawn draws from here.
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,
    pub(crate) aim: AimCharge,
    pub(crate) duck: Duck,
    pub(crate) targets: Vec<Target>,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) scoreboard: Scoreboard,
    /// Simulation frame counter
    pub(crate) time_ticks: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a simulation with the given seed and tuning: full target
    /// field, one enemy at the spawn origin, duck grounded at the origin.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            aim: AimCharge::default(),
            duck: Duck::default(),
            targets: Vec::new(),
            enemies: Vec::new(),
            scoreboard: Scoreboard::default(),
            time_ticks: 0,
            events: Vec::new(),
        };

        for _ in 0..state.tuning.target_count {
            state.spawn_target();
        }
        state.spawn_enemy();

        state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn aim(&self) -> &AimCharge {
        &self.aim
    }

    pub fn duck(&self) -> &Duck {
        &self.duck
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Take the events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn one target at a pseudo-random board position, re-rolling the
    /// height until it clears the ground band.
    pub(crate) fn spawn_target(&mut self) {
        let x = self.rng.random_range(0..100u32) as f32 / 20.0;
        let mut y = self.rng.random_range(0..100u32) as f32 / 28.0;
        while y < 1.0 {
            y = self.rng.random_range(0..100u32) as f32 / 26.0;
        }
        self.targets.push(Target {
            position: Vec2::new(x, y),
        });
    }

    /// Append one enemy at the fixed spawn origin.
    pub(crate) fn spawn_enemy(&mut self) {
        self.enemies.push(Enemy {
            position: self.tuning.enemy_origin,
        });
    }
}
