pub mod error;
pub mod simulation;
pub mod configuration;
pub mod output;

pub use error::{Result, SimError};

pub use simulation::states::{Body, BodyId, System, NVec2};
pub use simulation::trajectory::{Trajectory, TrajectorySeries, TRAJECTORY_CAPACITY};
pub use simulation::params::{Parameters, StepCount, UpdateOrder, GRAVITATIONAL_CONSTANT, DEFAULT_DT};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::frame::{barycenter, velocity_barycenter, normalize_to_barycenter};
pub use simulation::integrator::{initialize_accelerations, verlet_integrator, verlet_sequential, verlet_synchronous};
pub use simulation::diagnostics::{total_momentum, kinetic_energy, potential_energy, total_energy};
pub use simulation::engine::{Simulation, RunReport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, PositionUnit, AU};

pub use output::{csv::{write_trajectories, write_trajectories_file}, plot::run_plot_script};
