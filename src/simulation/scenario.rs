//! Build and drive fully-initialized simulation scenarios.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - engine toggles (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active interaction set (`InteractionSet`)
//! - the seeded RNG used for spawned body sizes
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, integration, and drawing systems. It also carries the facade the
//! embedding application drives: spawning, clearing, toggling, ticking,
//! and the culled render iteration over trails and bodies.

use bevy::prelude::Resource;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{InteractionSet, PairwiseGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{AllocationError, Body, NVec2, System};
use crate::simulation::trail::TrailRect;
use crate::simulation::view::{Camera, Viewport};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine toggles, parameters, current system state, and
/// the set of active interaction terms
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: InteractionSet,
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, AllocationError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            k: p_cfg.k,
            c: p_cfg.c,
            min_dist: p_cfg.min_dist,
            max_dt: p_cfg.max_dt,
            trail_capacity: p_cfg.trail_capacity,
            spawn_size_min: p_cfg.spawn_size_min,
            spawn_size_max: p_cfg.spawn_size_max,
            seed: p_cfg.seed,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            collision: e_cfg.collision,
            paused: e_cfg.paused,
        };

        // Initial system state: bodies from config, at t = 0
        let mut system = System::new();
        for bc in &cfg.bodies {
            let body = body_from_config(bc, parameters.trail_capacity)?;
            system.bodies.add(body)?;
        }

        // Forces: construct an InteractionSet and register pairwise gravity
        let forces = InteractionSet::new().with(PairwiseGravity {
            k: parameters.k,
            c: parameters.c,
            min_dist: parameters.min_dist,
        });

        let rng = StdRng::seed_from_u64(parameters.seed);

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            rng,
        })
    }

    /// Add a body at `world_pos` with zero velocity and a radius drawn
    /// uniformly from the configured spawn range. Returns its index.
    pub fn spawn_body(&mut self, world_pos: NVec2) -> Result<usize, AllocationError> {
        let span = self.parameters.spawn_size_max - self.parameters.spawn_size_min;
        let size = self.parameters.spawn_size_min + self.rng.gen::<f64>() * span;

        let body = Body::with_size(
            world_pos,
            NVec2::zeros(),
            size,
            self.parameters.trail_capacity,
        )?;
        self.system.bodies.add(body)
    }

    /// Despawn every body, releasing each trail buffer with it.
    pub fn clear_bodies(&mut self) {
        self.system.bodies.clear();
    }

    pub fn collision(&self) -> bool {
        self.engine.collision
    }

    pub fn set_collision(&mut self, enabled: bool) {
        self.engine.collision = enabled;
    }

    pub fn paused(&self) -> bool {
        self.engine.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.engine.paused = paused;
    }

    /// Advance physics and trails by `dt` seconds, clamped to the frame
    /// time cap. A paused scenario keeps its state; rendering iteration
    /// stays available either way.
    pub fn tick(&mut self, dt: f64) {
        if self.engine.paused {
            return;
        }

        let dt = dt.min(self.parameters.max_dt);

        let Scenario {
            system,
            parameters,
            engine,
            forces,
            ..
        } = self;

        euler_step(system, forces, engine, parameters, dt);
    }

    /// Drive trail rendering: `f` is called once per live trail sample
    /// inside the viewport, oldest to newest per body, with the sample's
    /// screen-space rectangle and fade alpha. Sample extents scale with
    /// `zoom + 0.5` so trails thicken slightly when zoomed in.
    pub fn for_each_visible_trail(
        &mut self,
        viewport: Viewport,
        camera: Camera,
        mut f: impl FnMut(TrailRect, u8),
    ) {
        for body in self.system.bodies.iter_mut() {
            body.trail.reset_read_to_oldest();

            for _ in 0..body.trail.count() {
                let sample = body.trail.read();

                let screen = camera.world_to_screen(NVec2::new(sample.x, sample.y));
                let w = sample.w * (camera.zoom + 0.5);
                let h = sample.h * (camera.zoom + 0.5);

                if viewport.is_visible(screen, NVec2::new(w, h)) {
                    let alpha = body.trail.fade_alpha();
                    f(
                        TrailRect {
                            x: screen.x,
                            y: screen.y,
                            w,
                            h,
                        },
                        alpha,
                    );
                }
            }
        }
    }

    /// Drive body rendering: `f` is called with the screen-space center
    /// and radius of every body inside the viewport.
    pub fn for_each_visible_body(
        &self,
        viewport: Viewport,
        camera: Camera,
        mut f: impl FnMut(NVec2, f64),
    ) {
        for body in self.system.bodies.iter() {
            let screen = camera.world_to_screen(body.x);
            let radius = body.size * camera.zoom;

            if viewport.is_visible(screen, NVec2::new(radius, radius)) {
                f(screen, radius);
            }
        }
    }
}

/// Map `BodyConfig` -> runtime `Body` using nalgebra vectors
fn body_from_config(
    bc: &BodyConfig,
    trail_capacity: usize,
) -> Result<Body, AllocationError> {
    Body::with_size(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.size,
        trail_capacity,
    )
}
