//! Error types for planetsim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("step count must be positive, got {0}")]
    InvalidStepCount(i64),

    #[error("step count {steps} is below the sample capacity {capacity}; sampling cadence would be zero")]
    StepCountBelowCadence { steps: i64, capacity: usize },

    #[error("invalid timestep: {0}")]
    InvalidTimestep(f64),

    #[error("gravitational constant must be finite and positive, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("system has no bodies")]
    EmptySystem,

    #[error("invalid body '{name}': {reason}")]
    InvalidBody { name: String, reason: String },

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("bodies '{first}' and '{second}' share the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("trajectory buffer full (capacity {capacity})")]
    TrajectoryFull { capacity: usize },

    #[error("scenario parse error: {0}")]
    Scenario(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plot script '{script}' failed: {status}")]
    PlotScript { script: String, status: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
