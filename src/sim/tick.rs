//! Fixed per-frame simulation update
//!
//! Frame order is fixed and total: aim/charge update, trajectory
//! integration while airborne, target collision resolution, enemy advance,
//! enemy contact check. Rendering reads state only after `tick` returns.

use serde::{Deserialize, Serialize};

use super::collision::circle_hit;
use super::state::{GameEvent, GameState};
use crate::clamp_elapsed;

/// Control booleans for a single frame, produced by the input layer and
/// read-only to the core. Releasing `charge` is what launches the duck;
/// the release transition is detected here, not synthesized upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub charge: bool,
}

/// Advance the simulation by one frame.
pub fn tick(state: &mut GameState, controls: &ControlState, elapsed: f32) {
    let dt = clamp_elapsed(elapsed);
    state.time_ticks += 1;

    update_aim(state, controls);

    if state.duck.is_airborne() {
        let landed = state.duck.integrate(dt, &state.tuning);
        if landed {
            state.aim.reset_power();
            state.events.push(GameEvent::Landed {
                x: state.duck.position().x,
            });
        }
        // Overlap is tested during active flight only, including the frame
        // the duck lands on.
        resolve_target_hits(state);
    }

    advance_enemies(state);
    check_enemy_contact(state);
}

/// Apply the aim/charge priority chain (left > right > charge, one edit per
/// frame) and launch on charge release.
fn update_aim(state: &mut GameState, controls: &ControlState) {
    if controls.left {
        state.aim.steer_left();
    } else if controls.right {
        state.aim.steer_right();
    } else if controls.charge {
        state.aim.advance_charge(state.tuning.max_power);
    }

    if state.aim.charge_held && !controls.charge {
        let velocity = state.aim.launch_velocity();
        state.duck.launch(velocity);
        state.events.push(GameEvent::Launched { velocity });
    }
    state.aim.charge_held = controls.charge;
    state.aim.active = controls.left || controls.right || controls.charge;
}

/// Scan every target against the duck, then apply hits.
///
/// Hits are collected over the pre-scan snapshot and applied afterwards, so
/// a respawned target can never be consumed by the pass that created it.
fn resolve_target_hits(state: &mut GameState) {
    let duck_pos = state.duck.position();
    let min_radius = state.tuning.min_radius;

    let hits: Vec<usize> = state
        .targets
        .iter()
        .enumerate()
        .filter(|(_, target)| circle_hit(duck_pos, target.position(), min_radius))
        .map(|(index, _)| index)
        .collect();

    // Hits are in ascending index order; each applied hit removes one
    // element below the next index and appends its replacement at the end.
    for (applied, index) in hits.into_iter().enumerate() {
        let consumed = state.targets.remove(index - applied);
        let score = state.scoreboard.award();
        state.events.push(GameEvent::TargetHit {
            position: consumed.position(),
            score,
        });
        state.spawn_target();

        if score % 10 == 0 {
            state.spawn_enemy();
            state.events.push(GameEvent::EnemySpawned {
                count: state.enemies.len(),
            });
        }
    }
}

/// Home every enemy toward the duck's current position.
fn advance_enemies(state: &mut GameState) {
    let goal = state.duck.position();
    let smoothing = state.tuning.enemy_smoothing();
    for enemy in &mut state.enemies {
        enemy.advance(goal, smoothing);
    }
}

/// Emit a contact event for every enemy overlapping the duck. Enemies are
/// never removed and the simulation takes no further action.
fn check_enemy_contact(state: &mut GameState) {
    let duck_pos = state.duck.position();
    let min_radius = state.tuning.min_radius;
    for enemy in &state.enemies {
        if circle_hit(duck_pos, enemy.position(), min_radius) {
            state.events.push(GameEvent::EnemyContact {
                position: enemy.position(),
            });
        }
    }
}
