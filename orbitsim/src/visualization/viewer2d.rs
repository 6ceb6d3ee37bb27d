use bevy::prelude::*;
use bevy::color::Alpha;

use crate::simulation::clock::RunState;
use crate::simulation::commands::EngineCommand;
use crate::simulation::engine::Engine;
use crate::simulation::snapshot::Snapshot;
use crate::simulation::states::{BodyColor, BodyId};
use crate::simulation::vector::NVec2;

/// Engine plus the last snapshot it published. The only place the viewer reads body state.
#[derive(Resource)]
struct Sim {
    engine: Engine,
    last: Snapshot,
}

/// Body highlighted in the viewer, cleared when the engine reports its removal
#[derive(Resource, Default)]
struct Selected(Option<BodyId>);

/// Simulation units -> screen pixels
const SCALE: f32 = 1.5;

/// Simulation point drawn at the window center
const ORIGIN: (f64, f64) = (300.0, 200.0);

pub fn run_2d(engine: Engine) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", engine.len());
    println!("keys: Space pause/resume, R reset, C collisions, Up/Down time scale, Tab select");

    let last = engine.snapshot();
    App::new()
        .insert_resource(Sim { engine, last })
        .init_resource::<Selected>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbitsim".into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (input_system, physics_step_system, draw_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Translate key presses into engine commands, applied at the start of the next tick
fn input_system(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Sim>, mut selected: ResMut<Selected>) {
    let Sim { engine, last } = &mut *sim;

    if keys.just_pressed(KeyCode::Space) {
        let cmd = if engine.run_state() == RunState::Running {
            EngineCommand::Pause
        } else {
            EngineCommand::Resume
        };
        engine.enqueue(cmd);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        engine.enqueue(EngineCommand::Reset);
    }
    if keys.just_pressed(KeyCode::KeyC) {
        engine.enqueue(EngineCommand::SetCollisionsEnabled(!engine.collisions_enabled()));
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        engine.enqueue(EngineCommand::SetTimeScale(engine.time_scale() * 2.0));
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        engine.enqueue(EngineCommand::SetTimeScale(engine.time_scale() / 2.0));
    }
    if keys.just_pressed(KeyCode::Tab) {
        selected.0 = next_selection(last, selected.0);
        if let Some(b) = selected.0.and_then(|id| last.body(id)) {
            info!("selected {} `{}` m = {:.2}", b.id, b.name, b.mass);
        }
    }
}

/// Next body by id after `current`, wrapping around
fn next_selection(snap: &Snapshot, current: Option<BodyId>) -> Option<BodyId> {
    let mut ids: Vec<BodyId> = snap.bodies.iter().map(|b| b.id).collect();
    ids.sort();
    match current {
        Some(cur) => ids.iter().copied().find(|&id| id > cur).or_else(|| ids.first().copied()),
        None => ids.first().copied(),
    }
}

fn physics_step_system(time: Res<Time>, mut sim: ResMut<Sim>, mut selected: ResMut<Selected>) {
    let snap = sim.engine.tick(time.delta_seconds_f64());

    for r in &snap.removed {
        debug!("removed {} ({:?})", r.id, r.cause);
    }
    if selected.0.is_some_and(|id| snap.was_removed(id)) {
        selected.0 = None;
    }
    sim.last = snap;
}

fn draw_system(sim: Res<Sim>, selected: Res<Selected>, mut gizmos: Gizmos) {
    for body in &sim.last.bodies {
        let color = parse_color(&body.color);

        if body.trail.len() >= 2 {
            gizmos.linestrip_2d(body.trail.iter().map(to_screen), color.with_alpha(0.35));
        }

        let center = to_screen(&body.position);
        gizmos.circle_2d(center, body.radius as f32 * SCALE, color);

        if selected.0 == Some(body.id) {
            gizmos.circle_2d(center, body.radius as f32 * SCALE + 6.0, Color::srgb(1.0, 1.0, 0.0));
        }
    }
}

/// Canvas-style coordinates (y down) to Bevy world space (y up)
fn to_screen(p: &NVec2) -> Vec2 {
    Vec2::new(
        (p.x - ORIGIN.0) as f32 * SCALE,
        (ORIGIN.1 - p.y) as f32 * SCALE,
    )
}

fn parse_color(c: &BodyColor) -> Color {
    Srgba::hex(&c.0).map(Color::from).unwrap_or(Color::WHITE)
}
