//! Duck Hop entry point
//!
//! Wires the logger, the mesh library, and a short scripted run of the
//! simulation. The windowed shell (event loop + renderer) lives outside
//! this crate; this binary exercises the full startup path and shows a
//! deterministic run end to end.

use anyhow::Result;

use duck_hop::Tuning;
use duck_hop::assets::{GameMeshes, MeshLibrary};
use duck_hop::scene;
use duck_hop::sim::{ControlState, GameEvent, GameState, tick};

const DEMO_DT: f32 = 1.0 / 60.0;
const DEMO_SEED: u64 = 0xbead_1234;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let blob_path = args.next();
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEMO_SEED);

    // Asset problems are fatal before the simulation starts.
    let meshes = match &blob_path {
        Some(path) => {
            let library = MeshLibrary::from_file(path)?;
            log::info!("loaded {} meshes from {path}", library.mesh_count());
            Some(GameMeshes::resolve(&library)?)
        }
        None => {
            log::info!("no mesh blob given, running headless");
            None
        }
    };

    let mut state = GameState::new(seed, Tuning::default());
    log::info!("simulation seeded with {seed:#x}");

    // Scripted demo: aim right, ride the charge meter, release, then let
    // the arc play out.
    let aim = ControlState {
        right: true,
        ..Default::default()
    };
    let charge = ControlState {
        charge: true,
        ..Default::default()
    };
    let idle = ControlState::default();

    for _ in 0..25 {
        tick(&mut state, &aim, DEMO_DT);
    }
    for _ in 0..20 {
        tick(&mut state, &charge, DEMO_DT);
    }

    let mut frames = 0u32;
    tick(&mut state, &idle, DEMO_DT);
    while state.duck().is_airborne() && frames < 600 {
        tick(&mut state, &idle, DEMO_DT);
        frames += 1;
    }

    for event in state.drain_events() {
        match event {
            GameEvent::Launched { velocity } => {
                log::info!("launched at ({:.2}, {:.2})", velocity.x, velocity.y)
            }
            GameEvent::Landed { x } => {
                log::info!("landed at x = {x:.2} after {frames} frames")
            }
            GameEvent::TargetHit { score, .. } => log::info!("hit! score {score}"),
            GameEvent::EnemySpawned { count } => {
                log::info!("{count} enemies on the board")
            }
            GameEvent::EnemyContact { position } => {
                log::warn!("enemy contact at ({:.2}, {:.2})", position.x, position.y)
            }
        }
    }
    log::info!("final score: {}", state.scoreboard().score());

    if let Some(meshes) = &meshes {
        let calls = scene::draw_list(&state, meshes);
        log::info!("frame draw list: {} calls", calls.len());
    }

    Ok(())
}
