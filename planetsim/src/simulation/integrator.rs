//! Fixed-step velocity-Verlet integrator for the planetary system
//!
//! Every step applies, per body,
//!   x_n+1 = x_n + dt v_n + 1/2 dt^2 a_n
//!   a_n+1 = a(x_n+1)
//!   v_n+1 = v_n + 1/2 dt (a_n + a_n+1)
//! and stores a_n+1 on the body for the next step. The order in which bodies
//! are processed is selected by [`UpdateOrder`].

use super::forces::AccelSet;
use super::params::{Parameters, UpdateOrder};
use super::states::{BodyId, NVec2, System};

/// Evaluate every body's acceleration on the current positions and store it.
/// Must run once, after frame normalization and before the first step.
pub fn initialize_accelerations(sys: &mut System, forces: &AccelSet) {
    let mut a = vec![NVec2::zeros(); sys.bodies.len()];
    forces.accumulate_accels(&*sys, &mut a);
    for (b, a) in sys.bodies.iter_mut().zip(a) {
        b.a = a;
    }
}

/// Advance the system by one step of `params.dt` in the configured order
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    match params.order {
        UpdateOrder::Sequential => verlet_sequential(sys, forces, params.dt),
        UpdateOrder::Synchronous => verlet_synchronous(sys, forces, params.dt),
    }
}

/// One step where each body completes its drift and kick before the next
/// body moves. Body i's new acceleration therefore sees bodies 0..i at their
/// new positions and bodies i+1.. at their old ones.
pub fn verlet_sequential(sys: &mut System, forces: &AccelSet, dt: f64) {
    let half_dt2 = 0.5 * dt * dt;

    for i in 0..sys.bodies.len() {
        {
            let b = &mut sys.bodies[i];
            b.x += dt * b.v + half_dt2 * b.a;
        }

        let a_new = forces.acceleration_on(BodyId(i), &*sys);

        let b = &mut sys.bodies[i];
        b.v += 0.5 * dt * (b.a + a_new);
        b.a = a_new;
    }

    sys.t += dt;
}

/// One step where all positions advance first, then every new acceleration
/// is evaluated on that same snapshot before any velocity changes.
pub fn verlet_synchronous(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }
    let half_dt2 = 0.5 * dt * dt;

    // Drift: x_n+1 = x_n + dt v_n + 1/2 dt^2 a_n
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v + half_dt2 * b.a;
    }

    // a_n+1 from the fully-stepped positions
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut a_new);

    // Kick: v_n+1 = v_n + 1/2 dt (a_n + a_n+1)
    for (b, a) in sys.bodies.iter_mut().zip(a_new) {
        b.v += 0.5 * dt * (b.a + a);
        b.a = a;
    }

    sys.t += dt;
}
