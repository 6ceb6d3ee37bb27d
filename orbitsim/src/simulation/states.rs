//! Core state types for the N-body engine.
//!
//! Defines the single simulated entity, [`Body`], its stable [`BodyId`] and the
//! [`BodySpec`] payload used to create one. Positions and velocities use `NVec2`.

use std::fmt;

use serde::Deserialize;

use crate::error::{EngineError, Result};
use crate::simulation::trail::Trail;
use crate::simulation::vector::{is_finite, NVec2};

/// Stable identifier, assigned once at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display color, opaque to physics (usually a `#rrggbb` string)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BodyColor(pub String);

impl Default for BodyColor {
    fn default() -> Self {
        BodyColor("#ffffff".to_string())
    }
}

impl From<&str> for BodyColor {
    fn from(s: &str) -> Self {
        BodyColor(s.to_string())
    }
}

/// Radius derived from mass whenever mass is set directly
pub fn radius_for_mass(mass: f64) -> f64 {
    5.0 + mass.sqrt() / 2.0
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub mass: f64,       // always > 0
    pub radius: f64,     // derived, see `radius_for_mass` and merge rule
    pub position: NVec2,
    pub velocity: NVec2,
    pub color: BodyColor,
    pub trail: Trail,    // past positions, display only
}

impl Body {
    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Set mass and recompute the derived radius
    pub(crate) fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        self.radius = radius_for_mass(mass);
    }

    /// Position, velocity and mass are all finite
    pub(crate) fn is_finite(&self) -> bool {
        self.mass.is_finite() && is_finite(&self.position) && is_finite(&self.velocity)
    }
}

/// Creation payload for `Engine::add_body`
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub name: String,
    pub mass: f64,
    pub position: NVec2,
    pub velocity: NVec2,
    pub color: BodyColor,
}

impl BodySpec {
    pub fn new(name: impl Into<String>, mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            color: BodyColor::default(),
        }
    }

    pub fn with_color(mut self, color: impl Into<BodyColor>) -> Self {
        self.color = color.into();
        self
    }

    /// Reject specs that would break the body invariants
    pub fn validate(&self) -> Result<()> {
        validate_mass(self.mass)?;
        if !is_finite(&self.position) {
            return Err(EngineError::invalid_body(format!(
                "position of `{}` is not finite", self.name
            )));
        }
        if !is_finite(&self.velocity) {
            return Err(EngineError::invalid_body(format!(
                "velocity of `{}` is not finite", self.name
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_mass(mass: f64) -> Result<()> {
    // `!(mass > 0.0)` also catches NaN
    if !(mass > 0.0) || !mass.is_finite() {
        return Err(EngineError::invalid_body(format!("mass must be positive and finite, got {mass}")));
    }
    Ok(())
}
