//! Core state types for the gravitational-mass simulation.
//!
//! Defines the body/store structs:
//! - `Body`      a simulated disc mass with its owned trail history
//! - `BodyStore` growable collection of bodies with a fixed growth increment
//! - `System`    the list of bodies and the current simulation time `t`
//!
//! Store growth is fallible: a failed reallocation surfaces as
//! [`AllocationError`] and leaves the store untouched.

use nalgebra::Vector2;

use crate::simulation::trail::TrailBuffer;

use std::collections::TryReserveError;
use std::fmt;

pub type NVec2 = Vector2<f64>;

/// Initial (and post-clear) logical capacity of a [`BodyStore`].
pub const INITIAL_CAPACITY: usize = 10;

/// Fixed number of slots added per store growth.
pub const GROWTH_INCREMENT: usize = 10;

/// Mass from radius: `size^2 * pi * 8`. The factor 8 is a tuning constant,
/// not a physical density.
pub fn mass_from_size(size: f64) -> f64 {
    size * size * std::f64::consts::PI * 8.0
}

/// Growing a store or a trail buffer failed to acquire memory.
///
/// The collection that reported it is still in its prior valid state.
#[derive(Debug)]
pub struct AllocationError(TryReserveError);

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allocation failed: {}", self.0)
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<TryReserveError> for AllocationError {
    fn from(err: TryReserveError) -> Self {
        Self(err)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub size: f64, // radius
    pub m: f64, // mass
    pub trail: TrailBuffer, // recent positions, oldest overwritten first
}

impl Body {
    /// Build a body of the given radius with mass derived from it and a
    /// freshly allocated trail buffer of `trail_capacity` samples.
    pub fn with_size(
        x: NVec2,
        v: NVec2,
        size: f64,
        trail_capacity: usize,
    ) -> Result<Self, AllocationError> {
        Ok(Self {
            x,
            v,
            size,
            m: mass_from_size(size),
            trail: TrailBuffer::new(trail_capacity)?,
        })
    }
}

/// Ordered collection of bodies.
///
/// Indices are stable until the next mutation. Capacity starts at
/// [`INITIAL_CAPACITY`] and grows by [`GROWTH_INCREMENT`] slots at a time;
/// there is no per-body removal, only [`BodyStore::clear`].
#[derive(Debug, Clone)]
pub struct BodyStore {
    data: Vec<Body>,
    capacity: usize, // logical capacity, grown in fixed increments
}

impl BodyStore {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Append a body, growing the store by [`GROWTH_INCREMENT`] slots when
    /// full. Returns the new body's index, or an error if the reallocation
    /// failed (existing bodies are untouched in that case).
    pub fn add(&mut self, body: Body) -> Result<usize, AllocationError> {
        if self.data.len() == self.capacity {
            self.data.try_reserve_exact(GROWTH_INCREMENT)?;
            self.capacity += GROWTH_INCREMENT;
        }
        self.data.push(body);
        Ok(self.data.len() - 1)
    }

    /// Drop every body (each one's trail storage with it) and reset the
    /// logical capacity to [`INITIAL_CAPACITY`], not zero.
    pub fn clear(&mut self) {
        self.data = Vec::with_capacity(INITIAL_CAPACITY);
        self.capacity = INITIAL_CAPACITY;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.data
    }
}

impl Default for BodyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: BodyStore, // collection of bodies
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: BodyStore::new(),
            t: 0.0,
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
