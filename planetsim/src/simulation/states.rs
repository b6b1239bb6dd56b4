//! Core state types for the planetary simulation.
//!
//! - `Body`   one point mass with its kinematic state and trajectory buffer
//! - `System` the ordered collection of bodies plus the simulation time `t`
//! - `BodyId` structural handle (index) used to tell bodies apart
//!
//! Bodies are owned exclusively by their `System`; the integrator mutates
//! them in place for the whole run.

use std::collections::HashSet;

use nalgebra::Vector2;

use crate::error::{Result, SimError};
use super::trajectory::{Trajectory, TrajectorySeries};

pub type NVec2 = Vector2<f64>;

/// Index of a body inside its `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // unique within the system
    pub color: String, // display label only
    pub m: f64, // mass (kg)
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration (m/s^2), recomputed every step
    pub trajectory: Trajectory, // down-sampled positions
}

impl Body {
    /// New body with zero acceleration and an empty trajectory
    pub fn new(name: impl Into<String>, color: impl Into<String>, m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            m,
            x,
            v,
            a: NVec2::zeros(),
            trajectory: Trajectory::new(),
        }
    }

    /// Copy of the recorded trace tagged with this body's identity
    pub fn series(&self) -> TrajectorySeries {
        TrajectorySeries {
            name: self.name.clone(),
            color: self.color.clone(),
            samples: self.trajectory.samples().to_vec(),
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| SimError::InvalidBody {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if !self.m.is_finite() || self.m <= 0.0 {
            return Err(invalid("mass must be finite and positive"));
        }
        if !(self.x.x.is_finite() && self.x.y.is_finite()) {
            return Err(invalid("position must be finite"));
        }
        if !(self.v.x.is_finite() && self.v.y.is_finite()) {
            return Err(invalid("velocity must be finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered, fixes output order
    pub t: f64, // time (s)
}

impl System {
    /// Build a system at t = 0, rejecting input the force model cannot handle:
    /// empty lists, non-positive masses, repeated names, and coincident bodies
    pub fn new(bodies: Vec<Body>) -> Result<Self> {
        if bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }

        let mut names = HashSet::with_capacity(bodies.len());
        for b in &bodies {
            b.validate()?;
            if !names.insert(b.name.as_str()) {
                return Err(SimError::DuplicateName(b.name.clone()));
            }
        }

        for (i, bi) in bodies.iter().enumerate() {
            for bj in &bodies[i + 1..] {
                if bi.x == bj.x {
                    return Err(SimError::CoincidentBodies {
                        first: bi.name.clone(),
                        second: bj.name.clone(),
                    });
                }
            }
        }

        Ok(Self { bodies, t: 0.0 })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> {
        (0..self.bodies.len()).map(BodyId)
    }

    /// Handle of the body called `name`
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Trajectory series of every body, in body order
    pub fn trajectories(&self) -> Vec<TrajectorySeries> {
        self.bodies.iter().map(Body::series).collect()
    }
}
