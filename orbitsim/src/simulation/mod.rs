pub mod vector;
pub mod states;
pub mod params;
pub mod registry;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod trail;
pub mod clock;
pub mod commands;
pub mod snapshot;
pub mod engine;
pub mod scenario;
