//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - force constants (`k`, `c`) and the distance floor (`min_dist`),
//! - the frame time cap (`max_dt`),
//! - trail capacity and spawn size range,
//! - deterministic seed for spawned body sizes

#[derive(Debug, Clone)]
pub struct Parameters {
    pub k: f64, // force scale
    pub c: f64, // additive force floor at large distances
    pub min_dist: f64, // distance floor - prevents singular forces at zero separation
    pub max_dt: f64, // frame time cap in seconds
    pub trail_capacity: usize, // trail samples kept per body
    pub spawn_size_min: f64, // smallest spawned radius (inclusive)
    pub spawn_size_max: f64, // largest spawned radius (exclusive)
    pub seed: u64, // deterministic seed to make runs reproducable
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            k: 1000.0,
            c: 50.0,
            min_dist: 1e-6,
            max_dt: 0.05, // cap at 50ms (20 FPS)
            trail_capacity: 150,
            spawn_size_min: 15.0,
            spawn_size_max: 30.0,
            seed: 42,
        }
    }
}
