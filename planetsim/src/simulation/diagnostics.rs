//! Conserved quantities used to sanity-check a run

use crate::simulation::states::{NVec2, System};

/// Sum of m v over all bodies
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.m * b.v)
}

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Pairwise gravitational potential energy, -G m_i m_j / r_ij over i < j
pub fn potential_energy(sys: &System, g: f64) -> f64 {
    let mut energy = 0.0;
    for (i, bi) in sys.bodies.iter().enumerate() {
        for bj in &sys.bodies[i + 1..] {
            let r = (bj.x - bi.x).norm();
            energy -= g * bi.m * bj.m / r;
        }
    }
    energy
}

pub fn total_energy(sys: &System, g: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, g)
}
