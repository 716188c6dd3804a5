//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – initial runtime toggles (collision, paused)
//! - [`ParametersConfig`] – numerical parameters and force constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   collision: true         # elastic response for overlapping pairs
//!   paused: false
//!
//! parameters:
//!   k: 1000.0               # force scale
//!   c: 50.0                 # additive force floor at large distances
//!   min_dist: 1.0e-6        # distance floor guarding 1/d
//!   max_dt: 0.05            # frame time cap in seconds
//!   trail_capacity: 150     # trail samples kept per body
//!   spawn_size_min: 15.0    # smallest spawned radius
//!   spawn_size_max: 30.0    # largest spawned radius (exclusive)
//!   seed: 42                # deterministic seed for spawned sizes
//!
//! bodies:
//!   - x: [ -200.0, 0.0 ]
//!     v: [  0.0, 0.0 ]
//!     size: 20.0
//!   - x: [  200.0, 0.0 ]
//!     v: [  0.0, 0.0 ]
//!     size: 20.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation; body masses are derived from the sizes.

use serde::Deserialize;

/// Initial values of the runtime toggles
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub collision: bool, // elastic response for overlapping pairs
    pub paused: bool, // start frozen, rendering only
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub k: f64,              // force scale
    pub c: f64,              // additive force floor
    pub min_dist: f64,       // distance floor guarding 1/d
    pub max_dt: f64,         // frame time cap in seconds
    pub trail_capacity: usize, // trail samples kept per body
    pub spawn_size_min: f64, // smallest spawned radius
    pub spawn_size_max: f64, // largest spawned radius (exclusive)
    pub seed: u64,           // deterministic seed to make runs reproducable
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in world units
    pub v: Vec<f64>, // Initial velocity vector `v` in world units per second
    pub size: f64,   // Radius of the body; its mass is derived from this
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Initial runtime toggles
    pub parameters: ParametersConfig, // Global numerical parameters
    pub bodies: Vec<BodyConfig>, // Bodies present before any interactive spawning
}
