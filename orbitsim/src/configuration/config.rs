//! Configuration types for loading engine scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]   – physical constants, collision toggle, clock settings
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   g: 0.0667               # gravitational constant (simulation units)
//!   min_distance: 1.0       # separation floor for the force law
//!   collisions: true        # merge overlapping bodies
//!   time_scale: 1.0         # multiplier on frame delta
//!   trail_capacity: 100     # points kept per trail
//!   fixed_step: 0.016       # optional, enables the fixed-step accumulator
//!   max_substeps: 8         # optional, cap on steps per frame in fixed mode
//!
//! bodies:
//!   - name: "Sun"
//!     mass: 1000.0
//!     x: [300.0, 200.0]
//!     v: [0.0, 0.0]
//!     color: "#ffcc00"
//!   - name: "Planet"
//!     mass: 10.0
//!     x: [300.0, 100.0]
//!     v: [0.8, 0.0]
//! ```
//!
//! Every `engine` key is optional; missing keys take the engine defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::clock::StepMode;
use crate::simulation::params::{Parameters, DEFAULT_G, DEFAULT_MIN_DISTANCE};
use crate::simulation::states::{BodyColor, BodySpec};
use crate::simulation::trail::DEFAULT_TRAIL_CAPACITY;
use crate::simulation::vector::NVec2;

const DEFAULT_MAX_SUBSTEPS: u32 = 8;

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // clamp floor for pair separation
    #[serde(default = "default_true")]
    pub collisions: bool, // merge on overlap
    #[serde(default = "default_time_scale")]
    pub time_scale: f64, // frame delta multiplier
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize, // max trail points per body
    #[serde(default)]
    pub fixed_step: Option<f64>, // `Some` selects the fixed-step accumulator
    #[serde(default)]
    pub max_substeps: Option<u32>, // fixed mode catch-up cap
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            min_distance: DEFAULT_MIN_DISTANCE,
            collisions: true,
            time_scale: 1.0,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            fixed_step: None,
            max_substeps: None,
        }
    }
}

fn default_g() -> f64 { DEFAULT_G }
fn default_min_distance() -> f64 { DEFAULT_MIN_DISTANCE }
fn default_true() -> bool { true }
fn default_time_scale() -> f64 { 1.0 }
fn default_trail_capacity() -> usize { DEFAULT_TRAIL_CAPACITY }

impl EngineConfig {
    /// Runtime parameters (not yet validated)
    pub fn to_parameters(&self) -> Parameters {
        let step_mode = match self.fixed_step {
            Some(step) => StepMode::Fixed {
                step,
                max_substeps: self.max_substeps.unwrap_or(DEFAULT_MAX_SUBSTEPS),
            },
            None => StepMode::Variable,
        };
        Parameters {
            G: self.g,
            min_distance: self.min_distance,
            collisions_enabled: self.collisions,
            time_scale: self.time_scale,
            step_mode,
            trail_capacity: self.trail_capacity,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,      // display label
    pub mass: f64,         // must be > 0
    pub x: [f64; 2],       // initial position
    #[serde(default)]
    pub v: [f64; 2],       // initial velocity, defaults to rest
    #[serde(default)]
    pub color: BodyColor,  // display only
}

impl BodyConfig {
    pub fn to_spec(&self) -> BodySpec {
        BodySpec {
            name: self.name.clone(),
            mass: self.mass,
            position: NVec2::new(self.x[0], self.x[1]),
            velocity: NVec2::new(self.v[0], self.v[1]),
            color: self.color.clone(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
