//! Configuration types for loading planetary scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and integration settings
//! - [`BodyConfig`]       – name, color and initial state of each body
//! - [`ScenarioConfig`]   – top-level wrapper, optionally carrying a step count
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.674e-11            # gravitational constant (default)
//!   dt: 600.0               # step size in seconds (default)
//!   order: "synchronous"    # or "sequential"
//!   position_unit: "m"      # or "au"
//!
//! steps: 20000              # optional, the command line wins
//!
//! bodies:
//!   - name: Sun
//!     color: yellow
//!     m: 1.989e30
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!   - name: Earth
//!     color: deepskyblue
//!     m: 5.972e24
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//! ```

use serde::Deserialize;

use crate::simulation::params::{UpdateOrder, DEFAULT_DT, GRAVITATIONAL_CONSTANT};

/// Astronomical unit in meters
pub const AU: f64 = 149_597_870_691.0;

/// Unit of the `x` entries in [`BodyConfig`]. Velocities are always m/s.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionUnit {
    #[default]
    #[serde(rename = "m")]
    Meters,

    #[serde(rename = "au")]
    AstronomicalUnits,
}

impl PositionUnit {
    pub fn to_meters(self) -> f64 {
        match self {
            PositionUnit::Meters => 1.0,
            PositionUnit::AstronomicalUnits => AU,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_dt")]
    pub dt: f64, // time step size
    #[serde(default)]
    pub order: UpdateOrder,
    #[serde(default)]
    pub position_unit: PositionUnit,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            dt: DEFAULT_DT,
            order: UpdateOrder::default(),
            position_unit: PositionUnit::default(),
        }
    }
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub m: f64, // mass (kg)
    pub x: [f64; 2], // initial position, in `position_unit`
    pub v: [f64; 2], // initial velocity (m/s)
}

fn default_color() -> String {
    "white".to_string()
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub steps: Option<i64>,
    pub bodies: Vec<BodyConfig>,
}
