pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{EngineError, Result};

pub use simulation::vector::{distance, magnitude, normalize, scale, subtract, NVec2};
pub use simulation::states::{radius_for_mass, Body, BodyColor, BodyId, BodySpec};
pub use simulation::registry::BodyRegistry;
pub use simulation::forces::{ForceSet, ForceStats, ForceTerm, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::collisions::{resolve_collisions, Merge};
pub use simulation::trail::{Trail, TrailRecorder, DEFAULT_TRAIL_CAPACITY};
pub use simulation::clock::{RunState, SimClock, StepMode};
pub use simulation::commands::{BodyUpdate, EngineCommand};
pub use simulation::snapshot::{Removal, RemovalCause, Snapshot, TickStats};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, ScenarioConfig};

pub use visualization::{headless::run_headless, viewer2d::run_2d};

pub use benchmark::benchmark::bench_tick;
