//! Build fully-initialized engines from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`Scenario`]: the
//! validated runtime parameters plus the seed bodies. `into_engine` hands both
//! to [`Engine::new`]; the seed is what `Engine::reset` restores.

use crate::configuration::config::ScenarioConfig;
use crate::error::{EngineError, Result};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodySpec;
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = cfg.engine.to_parameters();
        parameters.validate()?;

        // Bodies: map `BodyConfig` -> `BodySpec`, naming the offender on failure
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let spec = bc.to_spec();
            spec.validate()
                .map_err(|e| EngineError::Config(format!("body {i} `{}`: {e}", bc.name)))?;
            bodies.push(spec);
        }

        Ok(Self { parameters, bodies })
    }

    /// Sun at (300, 200) with three planets on circular orbits
    pub fn default_solar() -> Self {
        let parameters = Parameters::default();
        let sun_pos = NVec2::new(300.0, 200.0);
        let sun_mass = 1000.0;

        let mut bodies = vec![
            BodySpec::new("Sun", sun_mass, sun_pos, NVec2::zeros()).with_color("#ffcc00"),
        ];
        for (name, mass, r, color) in [
            ("Mercury", 5.0, 60.0, "#b0b0b0"),
            ("Earth", 10.0, 100.0, "#3b82f6"),
            ("Mars", 8.0, 150.0, "#ef4444"),
        ] {
            // start above the sun, moving along +x: v = sqrt(G M / r)
            let speed = (parameters.G * sun_mass / r).sqrt();
            bodies.push(
                BodySpec::new(name, mass, sun_pos - NVec2::new(0.0, r), NVec2::new(speed, 0.0))
                    .with_color(color),
            );
        }

        Self { parameters, bodies }
    }

    pub fn into_engine(self) -> Result<Engine> {
        Engine::new(self.parameters, self.bodies)
    }
}
