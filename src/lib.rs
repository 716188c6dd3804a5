pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{AllocationError, Body, BodyStore, NVec2, System};
pub use simulation::trail::{record_motion, TrailBuffer, TrailRect};
pub use simulation::forces::{Interaction, InteractionSet, PairwiseGravity};
pub use simulation::integrator::euler_step;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::view::{Camera, Viewport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use visualization::gmsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_pairwise, bench_tick};
