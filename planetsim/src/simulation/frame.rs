//! Barycentric frame normalization
//!
//! Shifts the whole system so that its center of mass sits at the origin
//! and does not move. Applied once before integration starts.

use crate::simulation::states::{Body, NVec2, System};

/// Mass-weighted mean position
pub fn barycenter(sys: &System) -> NVec2 {
    weighted_mean(sys, |b| b.x)
}

/// Mass-weighted mean velocity
pub fn velocity_barycenter(sys: &System) -> NVec2 {
    weighted_mean(sys, |b| b.v)
}

/// Subtract the barycenter from every position and its velocity from every velocity
pub fn normalize_to_barycenter(sys: &mut System) {
    let center = barycenter(sys);
    let drift = velocity_barycenter(sys);

    for b in sys.bodies.iter_mut() {
        b.x -= center;
        b.v -= drift;
    }
}

fn weighted_mean<F>(sys: &System, field: F) -> NVec2
where
    F: Fn(&Body) -> NVec2,
{
    let total_mass = sys.total_mass();
    let sum = sys.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.m * field(b));
    if total_mass > 0.0 {
        sum / total_mass
    } else {
        NVec2::zeros()
    }
}
