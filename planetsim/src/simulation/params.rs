//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` and fixed step size `dt`,
//! - the update order used by the integrator,
//! - the per-body trajectory capacity
//!
//! `StepCount` is the validated number of steps for one run.

use serde::Deserialize;

use crate::error::{Result, SimError};
use super::trajectory::TRAJECTORY_CAPACITY;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Default integration step (s)
pub const DEFAULT_DT: f64 = 600.0;

/// How a velocity-Verlet step orders its per-body updates
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    /// Each body is drifted, re-accelerated and kicked before the next one
    /// moves, so later bodies see earlier bodies' new positions.
    #[serde(rename = "sequential")]
    Sequential,

    /// All bodies drift, then all accelerations are evaluated on the same
    /// fully-stepped snapshot, then all velocities are kicked.
    #[default]
    #[serde(rename = "synchronous")]
    Synchronous,
}

impl std::str::FromStr for UpdateOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "synchronous" => Ok(Self::Synchronous),
            other => Err(format!("unknown update order '{other}' (expected sequential or synchronous)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size
    pub order: UpdateOrder, // per-step update ordering
    pub sample_capacity: usize, // trajectory samples per body
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        if !self.g.is_finite() || self.g <= 0.0 {
            return Err(SimError::InvalidGravitationalConstant(self.g));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            dt: DEFAULT_DT,
            order: UpdateOrder::default(),
            sample_capacity: TRAJECTORY_CAPACITY,
        }
    }
}

/// Number of integration steps, checked against the sampling cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCount {
    steps: u64,
    sample_stride: u64,
}

impl StepCount {
    /// Validate `steps` for a run that records `capacity` samples per body.
    /// Rejects non-positive counts and counts below `capacity`, where the
    /// stride `steps / capacity` would be zero.
    pub fn new(steps: i64, capacity: usize) -> Result<Self> {
        if steps <= 0 {
            return Err(SimError::InvalidStepCount(steps));
        }
        let sample_stride = steps as u64 / capacity.max(1) as u64;
        if sample_stride == 0 {
            return Err(SimError::StepCountBelowCadence { steps, capacity });
        }
        Ok(Self {
            steps: steps as u64,
            sample_stride,
        })
    }

    pub fn get(&self) -> u64 {
        self.steps
    }

    /// Steps between two trajectory samples
    pub fn sample_stride(&self) -> u64 {
        self.sample_stride
    }

    /// Steps between two progress reports
    pub fn progress_stride(&self) -> u64 {
        (self.steps / 10).max(1)
    }
}
