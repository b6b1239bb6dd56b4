//! Force / acceleration contributors for the planetary engine
//!
//! An [`Acceleration`] term answers one question: what is the instantaneous
//! acceleration of a target body given every body's current position.
//! [`AccelSet`] sums the registered terms.

use crate::simulation::states::{BodyId, NVec2, System};

/// Trait for acceleration sources operating on [`System`]
pub trait Acceleration {
    /// Acceleration of body `target` caused by this term
    fn acceleration_on(&self, target: BodyId, sys: &System) -> NVec2;

    /// Add this term's contribution for every body into `out[i]`
    fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        for (i, a) in out.iter_mut().enumerate().take(sys.bodies.len()) {
            *a += self.acceleration_on(BodyId(i), sys);
        }
    }
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration of one body, summed over all terms
    pub fn acceleration_on(&self, target: BodyId, sys: &System) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.acceleration_on(target, sys))
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.accumulate_accels(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsoftened 2D Newtonian gravity, direct summation over all other bodies.
///
/// Two bodies at the same position divide by zero; `System::new` rejects
/// such input so it never reaches this term.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration_on(&self, target: BodyId, sys: &System) -> NVec2 {
        let bt = &sys.bodies[target.0];
        let mut net_force = NVec2::zeros();

        for (j, other) in sys.bodies.iter().enumerate() {
            if j == target.0 {
                continue;
            }

            // r points from the target toward the attracting body
            let r = other.x - bt.x;
            let distance_sq = r.dot(&r);
            let distance = distance_sq.sqrt();

            // |F| = G m_t m_o / d^2, directed along r / d
            let force_mag = self.g * bt.m * other.m / distance_sq;
            net_force += (force_mag / distance) * r;
        }

        net_force / bt.m
    }
}
