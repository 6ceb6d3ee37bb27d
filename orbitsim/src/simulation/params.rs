//! Numerical and physical parameters for the engine
//!
//! `Parameters` holds the validated runtime settings:
//! - gravitational constant `G` and the distance floor `min_distance`,
//! - collision merging on/off,
//! - time scale and stepping mode for the clock,
//! - trail capacity

use crate::error::{EngineError, Result};
use crate::simulation::clock::StepMode;
use crate::simulation::trail::DEFAULT_TRAIL_CAPACITY;

/// Simulation-scaled gravitational constant (not SI)
pub const DEFAULT_G: f64 = 0.0667;

/// Separations below this are clamped before squaring
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // epsilon floor on pair separation
    pub collisions_enabled: bool, // merge overlapping bodies
    pub time_scale: f64, // multiplier on frame delta
    pub step_mode: StepMode, // variable (per frame) or fixed accumulator
    pub trail_capacity: usize, // max points per trail
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            min_distance: DEFAULT_MIN_DISTANCE,
            collisions_enabled: true,
            time_scale: 1.0,
            step_mode: StepMode::Variable,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.G > 0.0) || !self.G.is_finite() {
            return Err(EngineError::InvalidParameter { name: "G", value: self.G });
        }
        if !(self.min_distance > 0.0) || !self.min_distance.is_finite() {
            return Err(EngineError::InvalidParameter { name: "min_distance", value: self.min_distance });
        }
        validate_time_scale(self.time_scale)?;
        if self.trail_capacity == 0 {
            return Err(EngineError::InvalidParameter { name: "trail_capacity", value: 0.0 });
        }
        if let StepMode::Fixed { step, max_substeps } = self.step_mode {
            if !(step > 0.0) || !step.is_finite() {
                return Err(EngineError::InvalidParameter { name: "step", value: step });
            }
            if max_substeps == 0 {
                return Err(EngineError::InvalidParameter { name: "max_substeps", value: 0.0 });
            }
        }
        Ok(())
    }
}

/// Only non-finite or negative scales are rejected; range limits belong to the UI
pub(crate) fn validate_time_scale(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidParameter { name: "time_scale", value });
    }
    Ok(())
}
