//! Per-frame draw list
//!
//! The renderer never touches simulation state; after `tick` returns it
//! receives this flat list of (mesh, world transform) pairs and draws them
//! in order. Transforms are copies, so nothing here can outlive the frame.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::assets::{GameMeshes, Mesh};
use crate::sim::GameState;

/// One mesh instance to draw.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub mesh: Mesh,
    pub transform: Mat4,
}

/// Vertical offset lifting the duck and aim bars onto the board surface.
const MESH_LIFT: f32 = 0.5;
/// Enemy meshes sit half a tile into their cell.
const ENEMY_OFFSET: Vec2 = Vec2::new(0.5, 0.5);
/// Score readout anchor (least significant digit) and per-digit step.
const SCORE_ANCHOR: Vec2 = Vec2::new(3.8, 2.5);
const SCORE_DIGIT_STEP: f32 = 0.1;
/// Red bar growth per unit of charge power.
const CHARGE_BAR_STRETCH: f32 = 0.6;

/// Build the frame's draw list: aim indicator while aiming, every target,
/// the duck, every enemy, then the score digits.
pub fn draw_list(state: &GameState, meshes: &GameMeshes) -> Vec<DrawCall> {
    let mut calls =
        Vec::with_capacity(state.targets().len() + state.enemies().len() + 6);
    let duck_pos = state.duck().position();

    if state.aim().is_active() {
        // Cursor degrees are clockwise-positive; mesh rotation is
        // counterclockwise, hence the sign flip.
        let rotation =
            Quat::from_rotation_z((-state.aim().angle_deg() as f32).to_radians());
        let anchor = (duck_pos + Vec2::new(0.0, MESH_LIFT)).extend(0.0);

        calls.push(DrawCall {
            mesh: meshes.cursor,
            transform: Mat4::from_rotation_translation(rotation, anchor),
        });
        let stretch = Vec3::new(
            1.0,
            1.0 + CHARGE_BAR_STRETCH * state.aim().power(),
            1.0,
        );
        calls.push(DrawCall {
            mesh: meshes.cursor_red,
            transform: Mat4::from_scale_rotation_translation(stretch, rotation, anchor),
        });
    }

    for target in state.targets() {
        calls.push(DrawCall {
            mesh: meshes.target,
            transform: Mat4::from_translation(target.position().extend(0.0)),
        });
    }

    calls.push(DrawCall {
        mesh: meshes.duck,
        transform: Mat4::from_translation(
            (duck_pos + Vec2::new(0.0, MESH_LIFT)).extend(0.0),
        ),
    });

    for enemy in state.enemies() {
        calls.push(DrawCall {
            mesh: meshes.enemy,
            transform: Mat4::from_translation((enemy.position() + ENEMY_OFFSET).extend(0.0)),
        });
    }

    // Digits march left from the anchor, least significant first.
    for (offset, digit) in state.scoreboard().digits().enumerate() {
        let position = Vec2::new(
            SCORE_ANCHOR.x - SCORE_DIGIT_STEP * offset as f32,
            SCORE_ANCHOR.y,
        );
        calls.push(DrawCall {
            mesh: meshes.digits[digit],
            transform: Mat4::from_translation(position.extend(0.0)),
        });
    }

    calls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::{ControlState, tick};

    fn tagged(tag: u32) -> Mesh {
        Mesh {
            first: tag,
            count: 1,
        }
    }

    fn fake_meshes() -> GameMeshes {
        let mut digits = [tagged(0); 10];
        for (value, slot) in digits.iter_mut().enumerate() {
            *slot = tagged(100 + value as u32);
        }
        GameMeshes {
            cursor: tagged(1),
            cursor_red: tagged(2),
            duck: tagged(3),
            target: tagged(4),
            enemy: tagged(5),
            digits,
        }
    }

    fn count_mesh(calls: &[DrawCall], mesh: Mesh) -> usize {
        calls.iter().filter(|c| c.mesh == mesh).count()
    }

    #[test]
    fn test_idle_frame_composition() {
        let state = GameState::new(11, Tuning::default());
        let meshes = fake_meshes();
        let calls = draw_list(&state, &meshes);

        // 7 targets + duck + 1 enemy + single zero digit, no aim bars.
        assert_eq!(calls.len(), 10);
        assert_eq!(count_mesh(&calls, meshes.target), 7);
        assert_eq!(count_mesh(&calls, meshes.duck), 1);
        assert_eq!(count_mesh(&calls, meshes.enemy), 1);
        assert_eq!(count_mesh(&calls, meshes.digits[0]), 1);
        assert_eq!(count_mesh(&calls, meshes.cursor), 0);
        assert_eq!(count_mesh(&calls, meshes.cursor_red), 0);
    }

    #[test]
    fn test_aim_bars_appear_while_charging() {
        let mut state = GameState::new(11, Tuning::default());
        let charge = ControlState {
            charge: true,
            ..Default::default()
        };
        tick(&mut state, &charge, 1.0 / 60.0);

        let meshes = fake_meshes();
        let calls = draw_list(&state, &meshes);
        assert_eq!(calls[0].mesh, meshes.cursor);
        assert_eq!(calls[1].mesh, meshes.cursor_red);

        // One charge step in, the red bar is stretched to 1 + 0.6 * 0.1.
        let y_scale = calls[1].transform.y_axis.y;
        assert!((y_scale - 1.06).abs() < 1e-5);
    }

    #[test]
    fn test_score_digit_layout() {
        let mut state = GameState::new(11, Tuning::default());
        state.scoreboard.score = 123;

        let meshes = fake_meshes();
        let calls = draw_list(&state, &meshes);
        let digits: Vec<_> = calls[calls.len() - 3..].to_vec();

        assert_eq!(digits[0].mesh, meshes.digits[3]);
        assert_eq!(digits[1].mesh, meshes.digits[2]);
        assert_eq!(digits[2].mesh, meshes.digits[1]);

        let x = |call: &DrawCall| call.transform.w_axis.x;
        assert!((x(&digits[0]) - 3.8).abs() < 1e-6);
        assert!((x(&digits[1]) - 3.7).abs() < 1e-6);
        assert!((x(&digits[2]) - 3.6).abs() < 1e-6);
    }

    #[test]
    fn test_enemy_count_tracks_swarm() {
        let mut state = GameState::new(11, Tuning::default());
        state.spawn_enemy();
        state.spawn_enemy();

        let meshes = fake_meshes();
        let calls = draw_list(&state, &meshes);
        assert_eq!(count_mesh(&calls, meshes.enemy), 3);
    }
}
