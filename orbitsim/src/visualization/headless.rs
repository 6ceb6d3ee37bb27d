//! Windowless runner: ticks the engine a fixed number of frames with a fixed
//! frame delta, logging removals as they happen and a summary at the end.

use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::engine::Engine;
use crate::simulation::snapshot::Snapshot;

#[derive(Resource)]
struct HeadlessRun {
    engine: Engine,
    remaining: usize, // frames left
    dt: f64,          // frame delta fed to every tick
}

pub fn run_headless(engine: Engine, ticks: usize, dt: f64) {
    println!("run_headless: {} bodies, {} frames of {} s", engine.len(), ticks, dt);

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
            LogPlugin::default(),
        ))
        .insert_resource(HeadlessRun { engine, remaining: ticks, dt })
        .add_systems(Update, headless_step_system)
        .run();
}

fn headless_step_system(mut run: ResMut<HeadlessRun>, mut exit: EventWriter<AppExit>) {
    let HeadlessRun { engine, remaining, dt } = &mut *run;

    if *remaining == 0 {
        summarize(&engine.snapshot());
        exit.send(AppExit::Success);
        return;
    }

    let snap = engine.tick(*dt);
    for r in &snap.removed {
        info!("t = {:.3}: {} removed ({:?})", snap.time, r.id, r.cause);
    }
    *remaining -= 1;
}

fn summarize(snap: &Snapshot) {
    info!("finished at t = {:.3} after {} steps, {} bodies", snap.time, snap.ticks, snap.len());
    for b in &snap.bodies {
        info!(
            "{} {:<10} m = {:>9.3}  r = {:>6.2}  x = ({:>9.3}, {:>9.3})  v = ({:>7.3}, {:>7.3})",
            b.id, b.name, b.mass, b.radius, b.position.x, b.position.y, b.velocity.x, b.velocity.y
        );
    }
}
