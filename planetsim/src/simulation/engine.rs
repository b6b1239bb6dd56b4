//! Simulation run driver
//!
//! Owns the system, its force set and parameters, and runs the whole
//! batch: barycentric normalization, initial accelerations, N Verlet steps
//! with trajectory sampling and progress logging.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::error::Result;
use super::diagnostics::total_energy;
use super::forces::AccelSet;
use super::frame::normalize_to_barycenter;
use super::integrator::{initialize_accelerations, verlet_integrator};
use super::params::{Parameters, StepCount};
use super::states::System;
use super::trajectory::{Trajectory, TrajectorySeries};

/// Summary of one completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub steps: u64,
    pub sample_stride: u64,
    pub samples_per_body: usize,
    /// Samples per body that did not fit once the buffer was full. When
    /// non-zero, the kept samples cover only the first
    /// `capacity * sample_stride` steps of the run.
    pub dropped_samples: usize,
    pub elapsed: Duration,
    pub initial_energy: f64,
    pub final_energy: f64,
}

impl RunReport {
    /// |E_end - E_start| / |E_start|
    pub fn relative_energy_error(&self) -> f64 {
        if self.initial_energy == 0.0 {
            return (self.final_energy - self.initial_energy).abs();
        }
        ((self.final_energy - self.initial_energy) / self.initial_energy).abs()
    }
}

pub struct Simulation {
    pub system: System,
    pub forces: AccelSet,
    pub parameters: Parameters,
    normalized: bool,
}

impl Simulation {
    pub fn new(system: System, forces: AccelSet, parameters: Parameters) -> Self {
        Self {
            system,
            forces,
            parameters,
            normalized: false,
        }
    }

    /// Run `steps` integration steps.
    ///
    /// The step count is validated before anything is touched, so a rejected
    /// run leaves the system as it was. The barycentric shift is applied on
    /// the first run only; later runs continue from the current state with
    /// fresh trajectory buffers.
    pub fn run(&mut self, steps: i64) -> Result<RunReport> {
        self.parameters.validate()?;
        let count = StepCount::new(steps, self.parameters.sample_capacity)?;

        if !self.normalized {
            normalize_to_barycenter(&mut self.system);
            self.normalized = true;
            debug!("system shifted to barycentric frame");
        }
        initialize_accelerations(&mut self.system, &self.forces);

        for b in self.system.bodies.iter_mut() {
            b.trajectory = Trajectory::with_capacity(self.parameters.sample_capacity);
        }

        let n = count.get();
        let sample_stride = count.sample_stride();
        let progress_stride = count.progress_stride();
        let g = self.parameters.g;
        let initial_energy = total_energy(&self.system, g);

        info!(
            "simulating {} bodies for {} steps (dt = {} s, order = {:?})",
            self.system.len(),
            n,
            self.parameters.dt,
            self.parameters.order,
        );

        let mut dropped_samples = 0;
        let start = Instant::now();

        for i in 0..n {
            verlet_integrator(&mut self.system, &self.forces, &self.parameters);

            if i % sample_stride == 0 && !self.record_samples() {
                dropped_samples += 1;
            }

            if i % progress_stride == 0 {
                info!("Simulation progress: {}%", i * 100 / n);
            }
        }

        let elapsed = start.elapsed();
        info!("Simulation took {} ms using N = {}", elapsed.as_millis(), n);

        if dropped_samples > 0 {
            warn!(
                "trajectory capacity {} reached; {} trailing samples per body were not recorded, \
                 the trace covers only the first {} of {} steps",
                self.parameters.sample_capacity,
                dropped_samples,
                self.parameters.sample_capacity as u64 * sample_stride,
                n,
            );
        }

        let samples_per_body = self
            .system
            .bodies
            .iter()
            .map(|b| b.trajectory.len())
            .min()
            .unwrap_or(0);

        Ok(RunReport {
            steps: n,
            sample_stride,
            samples_per_body,
            dropped_samples,
            elapsed,
            initial_energy,
            final_energy: total_energy(&self.system, g),
        })
    }

    /// Append every body's position to its trajectory.
    /// Returns false when the buffers were already full and nothing was stored.
    fn record_samples(&mut self) -> bool {
        let mut stored = true;
        for b in self.system.bodies.iter_mut() {
            if b.trajectory.push(b.x).is_err() {
                stored = false;
            }
        }
        stored
    }

    /// Recorded traces in body order
    pub fn trajectories(&self) -> Vec<TrajectorySeries> {
        self.system.trajectories()
    }
}
