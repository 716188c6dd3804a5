//! Pairwise interaction terms for the simulation.
//!
//! Defines the [`Interaction`] trait and [`PairwiseGravity`], the direct
//! all-pairs term combining gravitational attraction with an elastic
//! collision response for overlapping bodies.

use crate::simulation::engine::Engine;
use crate::simulation::states::Body;

/// Collection of interaction terms.
/// Each term implements [`Interaction`] and is applied to the body slice
/// in registration order, once per step.
pub struct InteractionSet {
    terms: Vec<Box<dyn Interaction + Send + Sync>>,
}

impl InteractionSet {
    /// Create an empty interaction set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an interaction term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Interaction + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Apply every term's velocity updates for one step of length `dt`.
    /// Positions are left untouched; the integrator advances them after.
    pub fn apply_all(&self, dt: f64, engine: &Engine, bodies: &mut [Body]) {
        for term in &self.terms {
            term.interact(dt, engine, bodies);
        }
    }
}

impl Default for InteractionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for interaction sources operating on the body slice.
/// Implementations update body velocities in place; `engine` carries the
/// runtime toggles they must honor.
pub trait Interaction {
    fn interact(&self, dt: f64, engine: &Engine, bodies: &mut [Body]);
}

/// Direct O(n^2) pairwise gravity with an elastic collision branch.
///
/// Overlapping pairs exchange velocity per the two-body elastic formula
/// applied to each axis independently; separated pairs attract with
/// `F = k * (m1*m2 / d^2 + c)`. The additive `c` keeps a floor attraction
/// alive at large distances instead of a pure inverse-square falloff.
pub struct PairwiseGravity {
    pub k: f64, // force scale
    pub c: f64, // additive force floor
    pub min_dist: f64, // distance floor guarding 1/d
}

impl Interaction for PairwiseGravity {
    fn interact(&self, dt: f64, engine: &Engine, bodies: &mut [Body]) {
        let n = bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j. Velocity
        // updates are applied immediately, so later pairs see them.
        for i in 0..n {
            for j in (i + 1)..n {
                // Split the slice so both bodies can be borrowed mutably
                let (head, tail) = bodies.split_at_mut(j);
                let bi = &mut head[i];
                let bj = &mut tail[0];

                let d = (bj.x - bi.x).norm();

                if d <= bi.size + bj.size {
                    // Overlapping pair: elastic response, or nothing at
                    // all while collisions are switched off.
                    if !engine.collision {
                        continue;
                    }

                    let m1 = bi.m;
                    let m2 = bj.m;
                    let v1 = bi.v;
                    let v2 = bj.v;

                    // Two-body elastic exchange, each axis resolved as an
                    // independent head-on collision (the components share
                    // the same mass coefficients, so this is written with
                    // vector ops).
                    bi.v = (v1 * (m1 - m2) + v2 * (2.0 * m2)) / (m1 + m2);
                    bj.v = (v2 * (m2 - m1) + v1 * (2.0 * m1)) / (m1 + m2);
                    continue;
                }

                // Separated pair: gravitational-style attraction.
                // Floor the distance before it reaches 1/d.
                let d = d.max(self.min_dist);

                let force = self.k * (bi.m * bj.m / (d * d) + self.c);

                // Unit direction from body i toward body j
                let dir = (bj.x - bi.x) / d;

                // a = F/m per body, applied with opposite signs
                let accel_i = force / bi.m;
                bi.v += dir * accel_i * dt;

                let accel_j = force / bj.m;
                bj.v -= dir * accel_j * dt;
            }
        }
    }
}
