//! The gravitational N-body engine
//!
//! [`Engine`] exclusively owns the body registry and drives one tick per
//! rendered frame:
//!
//! 1. drain queued commands (FIFO)
//! 2. ask the clock how many steps this frame yields (none while paused)
//! 3. per step: net forces from one consistent snapshot, integrate every body,
//!    merge overlapping bodies, drop non-finite bodies, record trails
//! 4. publish a [`Snapshot`]
//!
//! All mutation goes through `&mut self`, so a command can never interleave
//! with a tick in progress.

use std::collections::VecDeque;

use crate::error::{EngineError, Result};
use crate::simulation::clock::{RunState, SimClock};
use crate::simulation::collisions::resolve_collisions;
use crate::simulation::commands::{BodyUpdate, EngineCommand};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::{validate_time_scale, Parameters};
use crate::simulation::registry::BodyRegistry;
use crate::simulation::snapshot::{Removal, RemovalCause, Snapshot, TickStats};
use crate::simulation::states::{validate_mass, Body, BodyId, BodySpec};
use crate::simulation::trail::TrailRecorder;
use crate::simulation::vector::NVec2;

pub struct Engine {
    registry: BodyRegistry,
    forces: ForceSet,
    clock: SimClock,
    trails: TrailRecorder,
    parameters: Parameters,
    seed: Vec<BodySpec>,           // bodies restored by `reset`
    queue: VecDeque<EngineCommand>, // deferred commands, drained at tick start
    removed: Vec<Removal>,         // removals not yet reported by `tick`
}

impl Engine {
    /// Build an engine from validated parameters and its seed bodies
    pub fn new(parameters: Parameters, seed: Vec<BodySpec>) -> Result<Self> {
        parameters.validate()?;
        for spec in &seed {
            spec.validate()?;
        }

        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
            min_distance: parameters.min_distance,
        });

        let mut engine = Self {
            registry: BodyRegistry::new(),
            forces,
            clock: SimClock::new(parameters.time_scale, parameters.step_mode),
            trails: TrailRecorder::new(parameters.trail_capacity),
            parameters,
            seed,
            queue: VecDeque::new(),
            removed: Vec::new(),
        };
        engine.insert_seed()?;
        Ok(engine)
    }

    fn insert_seed(&mut self) -> Result<()> {
        for spec in self.seed.clone() {
            self.registry.insert(spec, self.trails.new_trail())?;
        }
        Ok(())
    }

    // =========================================================================================
    // Tick
    // =========================================================================================

    /// Advance by one frame of `frame_delta` seconds (wall clock, before time scale)
    ///
    /// Queued commands are applied even while paused; physics is not.
    pub fn tick(&mut self, frame_delta: f64) -> Snapshot {
        self.drain_commands();

        let mut stats = TickStats::default();
        for dt in self.clock.advance(frame_delta) {
            self.step(dt, &mut stats);
        }

        let removed = std::mem::take(&mut self.removed);
        self.build_snapshot(removed, stats)
    }

    fn step(&mut self, dt: f64, stats: &mut TickStats) {
        stats.steps += 1;

        // every force comes from the pre-step state before anything moves
        let (forces, force_stats) = self.forces.net_forces(self.registry.as_slice());
        stats.clamped_pairs += force_stats.clamped_pairs;

        semi_implicit_euler(self.registry.as_mut_slice(), &forces, dt);

        if self.parameters.collisions_enabled {
            for m in resolve_collisions(&mut self.registry) {
                stats.merges += 1;
                self.removed.push(Removal {
                    id: m.absorbed,
                    cause: RemovalCause::Merged { into: m.survivor },
                });
            }
        }

        stats.unstable_removed += self.remove_unstable();

        self.trails.record(self.registry.as_mut_slice());
    }

    /// Drop bodies whose state went non-finite so the snapshot stays renderable
    fn remove_unstable(&mut self) -> usize {
        let bad: Vec<BodyId> = self
            .registry
            .iter()
            .filter(|b| !b.is_finite())
            .map(|b| b.id)
            .collect();

        for id in &bad {
            if let Some(b) = self.registry.remove(*id) {
                log::warn!(
                    "unstable state: removing {} `{}` (m = {}, x = {:?}, v = {:?})",
                    id, b.name, b.mass, b.position, b.velocity
                );
                self.removed.push(Removal { id: *id, cause: RemovalCause::Unstable });
            }
        }
        bad.len()
    }

    fn build_snapshot(&self, removed: Vec<Removal>, stats: TickStats) -> Snapshot {
        Snapshot {
            time: self.clock.elapsed(),
            ticks: self.clock.ticks(),
            state: self.clock.state(),
            time_scale: self.clock.time_scale(),
            collisions_enabled: self.parameters.collisions_enabled,
            bodies: self.registry.as_slice().to_vec(),
            removed,
            stats,
        }
    }

    /// Current view without advancing. Pending removals stay queued for the next `tick`.
    pub fn snapshot(&self) -> Snapshot {
        self.build_snapshot(self.removed.clone(), TickStats::default())
    }

    // =========================================================================================
    // Commands
    // =========================================================================================

    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyId> {
        let name = spec.name.clone();
        let id = self.registry.insert(spec, self.trails.new_trail())?;
        log::debug!("add_body: {} `{}`", id, name);
        Ok(id)
    }

    /// Remove `id`. Absent ids are ignored.
    pub fn remove_body(&mut self, id: BodyId) {
        if self.registry.remove(id).is_some() {
            log::debug!("remove_body: {}", id);
            self.removed.push(Removal { id, cause: RemovalCause::Command });
        }
    }

    /// Apply `update` to `id`. Absent ids are ignored.
    pub fn update_body(&mut self, id: BodyId, update: BodyUpdate) -> Result<()> {
        let Some(body) = self.registry.get_mut(id) else {
            log::debug!("update_body: {} not present, ignoring {:?}", id, update);
            return Ok(());
        };

        match update {
            BodyUpdate::Rename(name) => body.name = name,
            BodyUpdate::SetMass(m) => {
                validate_mass(m)?;
                body.set_mass(m);
            }
            BodyUpdate::SetVelocity(v) => {
                check_finite_component(v.x)?;
                check_finite_component(v.y)?;
                body.velocity = v;
            }
            BodyUpdate::SetVelocityX(vx) => {
                check_finite_component(vx)?;
                body.velocity.x = vx;
            }
            BodyUpdate::SetVelocityY(vy) => {
                check_finite_component(vy)?;
                body.velocity.y = vy;
            }
            BodyUpdate::SetColor(c) => body.color = c,
        }
        Ok(())
    }

    pub fn set_time_scale(&mut self, value: f64) -> Result<()> {
        validate_time_scale(value)?;
        self.parameters.time_scale = value;
        self.clock.set_time_scale(value);
        Ok(())
    }

    /// Toggle merging. Any change clears every trail.
    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        if self.parameters.collisions_enabled != enabled {
            self.parameters.collisions_enabled = enabled;
            self.trails.clear_all(self.registry.as_mut_slice());
        }
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Restore the seed bodies (with fresh ids) and zero the clock
    ///
    /// Time scale, collision setting and run state are kept.
    pub fn reset(&mut self) {
        for id in self.registry.ids() {
            self.removed.push(Removal { id, cause: RemovalCause::Reset });
        }
        self.registry.clear();
        self.clock.reset();
        // seed specs were validated in `new`
        if let Err(e) = self.insert_seed() {
            log::warn!("reset: seed body rejected: {e}");
        }
    }

    /// Defer `cmd` to the start of the next tick
    pub fn enqueue(&mut self, cmd: EngineCommand) {
        self.queue.push_back(cmd);
    }

    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    fn drain_commands(&mut self) {
        while let Some(cmd) = self.queue.pop_front() {
            if let Err(e) = self.apply(cmd) {
                log::warn!("queued command rejected: {e}");
            }
        }
    }

    /// Apply one command immediately
    pub fn apply(&mut self, cmd: EngineCommand) -> Result<()> {
        match cmd {
            EngineCommand::AddBody(spec) => self.add_body(spec).map(|_| ()),
            EngineCommand::RemoveBody(id) => {
                self.remove_body(id);
                Ok(())
            }
            EngineCommand::UpdateBody(id, update) => self.update_body(id, update),
            EngineCommand::SetTimeScale(v) => self.set_time_scale(v),
            EngineCommand::SetCollisionsEnabled(on) => {
                self.set_collisions_enabled(on);
                Ok(())
            }
            EngineCommand::Pause => {
                self.pause();
                Ok(())
            }
            EngineCommand::Resume => {
                self.resume();
                Ok(())
            }
            EngineCommand::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    // =========================================================================================
    // Queries
    // =========================================================================================

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.registry.get(id)
    }

    pub fn bodies(&self) -> &[Body] {
        self.registry.as_slice()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn run_state(&self) -> RunState {
        self.clock.state()
    }

    pub fn time_scale(&self) -> f64 {
        self.clock.time_scale()
    }

    pub fn collisions_enabled(&self) -> bool {
        self.parameters.collisions_enabled
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn total_mass(&self) -> f64 {
        self.registry.iter().map(|b| b.mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.registry.iter().fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.registry.iter().map(|b| b.kinetic_energy()).sum()
    }
}

fn check_finite_component(v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid_body(format!("velocity component must be finite, got {v}")))
    }
}
