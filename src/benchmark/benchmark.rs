use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{InteractionSet, PairwiseGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a system of size `n`
fn make_system(n: usize, trail_capacity: usize) -> System {
    let mut system = System::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed; spread wide enough
        // that most pairs sit in the force branch
        let x = NVec2::new(
            (i_f * 0.37).sin() * 5000.0,
            (i_f * 0.13).cos() * 5000.0,
        );

        let body = Body::with_size(x, NVec2::zeros(), 15.0, trail_capacity)
            .expect("trail allocation");
        system.bodies.add(body).expect("store growth");
    }

    system
}

fn make_params() -> Parameters {
    Parameters::default()
}

fn gravity_set(p: &Parameters) -> InteractionSet {
    InteractionSet::new().with(PairwiseGravity {
        k: p.k,
        c: p.c,
        min_dist: p.min_dist,
    })
}

/// Time the pairwise velocity pass alone for a range of n
pub fn bench_pairwise() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let dt = 0.016;

    let params = make_params();
    let engine = Engine {
        collision: true,
        paused: false,
    };

    for n in ns {
        let mut sys = make_system(n, params.trail_capacity);
        let forces = gravity_set(&params);

        // Warm up
        forces.apply_all(dt, &engine, sys.bodies.as_mut_slice());

        let t0 = Instant::now();
        forces.apply_all(dt, &engine, sys.bodies.as_mut_slice());
        let dt_pairwise = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, pairwise = {dt_pairwise:8.6} s");
    }
}

/// Time full frame steps (pairs + integration + trail recording)
pub fn bench_tick() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 5; // number of frame steps per size
    let dt = 0.016;

    let params = make_params();
    let engine = Engine {
        collision: true,
        paused: false,
    };

    for n in ns {
        let mut sys = make_system(n, params.trail_capacity);
        let forces = gravity_set(&params);

        // Warm-up
        euler_step(&mut sys, &forces, &engine, &params, dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces, &engine, &params, dt);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}
