//! Frame step for the simulation.
//!
//! Symplectic Euler: one velocity pass over the interaction set, then a
//! full-step position update per body with the frame's movement recorded
//! into that body's trail buffer.

use super::engine::Engine;
use super::forces::InteractionSet;
use super::params::Parameters;
use super::states::System;
use super::trail::record_motion;

/// Advance the system by one frame of length `dt`.
///
/// `dt` is clamped to `params.max_dt` here as well as at the caller, so a
/// stalled frame cannot blow up the integration. Updates velocities,
/// positions, trails, and `sys.t` in-place.
pub fn euler_step(
    sys: &mut System,
    forces: &InteractionSet,
    engine: &Engine,
    params: &Parameters,
    dt: f64,
) {
    if sys.bodies.is_empty() { // no bodies, return
        return;
    }

    let dt = dt.min(params.max_dt);

    // Kick: every pair interaction folds into the velocities.
    // All pair evaluations read pre-step positions.
    forces.apply_all(dt, engine, sys.bodies.as_mut_slice());

    // Drift: x_n+1 = x_n + dt * v_n+1, recording the movement of each
    // body into its trail as interpolated sub-steps.
    for b in sys.bodies.iter_mut() {
        let prev = b.x;
        b.x += b.v * dt;
        record_motion(&mut b.trail, prev, b.x);
    }

    // Advance time by the (clamped) step
    sys.t += dt;
}
