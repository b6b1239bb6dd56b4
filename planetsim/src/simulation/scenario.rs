//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with validated bodies at t = 0)
//! - active force set (`AccelSet`)
//! - an optional step count carried by the file

use std::fs;
use std::path::Path;

use log::debug;

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::Simulation;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub steps: Option<i64>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        let scale = p_cfg.position_unit.to_meters();

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body::new(
            bc.name.clone(),
            bc.color.clone(),
            bc.m,
            NVec2::new(bc.x[0], bc.x[1]) * scale,
            NVec2::new(bc.v[0], bc.v[1]),
        )).collect();

        let system = System::new(bodies)?;

        let parameters = Parameters {
            g: p_cfg.g,
            dt: p_cfg.dt,
            order: p_cfg.order,
            ..Parameters::default()
        };
        parameters.validate()?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        debug!("built scenario with {} bodies", system.len());

        Ok(Self {
            parameters,
            system,
            forces,
            steps: cfg.steps,
        })
    }

    /// Parse and build a scenario from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
        Self::build_scenario(cfg)
    }

    /// Load a scenario from a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// The Sun and the eight planets, each starting on the +x axis with a
    /// circular-orbit speed along +y
    pub fn solar_system() -> Result<Self> {
        Self::build_scenario(ScenarioConfig {
            parameters: ParametersConfig::default(),
            steps: None,
            bodies: solar_system_bodies(),
        })
    }

    pub fn into_simulation(self) -> Simulation {
        Simulation::new(self.system, self.forces, self.parameters)
    }
}

fn body(name: &str, color: &str, m: f64, x: f64, vy: f64) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        color: color.to_string(),
        m,
        x: [x, 0.0],
        v: [0.0, vy],
    }
}

/// Initial conditions of the solar system scenario
pub fn solar_system_bodies() -> Vec<BodyConfig> {
    vec![
        body("Sun", "yellow", 1.989e30, 0.0, 0.0),
        body("Mercury", "grey", 3.301e23, 5.791e10, 47870.0),
        body("Venus", "orange", 4.867e24, 1.082e11, 35020.0),
        body("Earth", "deepskyblue", 5.972e24, 1.496e11, 29780.0),
        body("Mars", "red", 6.419e23, 2.279e11, 24077.0),
        body("Jupiter", "brown", 1.898e27, 7.785e11, 13060.0),
        body("Saturn", "beige", 5.684e26, 1.433e12, 9680.0),
        body("Uranus", "aqua", 8.681e25, 2.871e12, 6800.0),
        body("Neptune", "royalblue", 1.024e26, 4.5e12, 5430.0),
    ]
}
