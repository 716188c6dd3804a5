//! Runtime engine toggles.
//!
//! The flags input handlers flip while the simulation runs, bundled into
//! one context object owned by the scenario and read by the frame step.

#[derive(Debug, Clone)]
pub struct Engine {
    pub collision: bool, // elastic response for overlapping pairs
    pub paused: bool, // freeze physics and trail writes, keep rendering
}
