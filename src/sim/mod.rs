//! Simulation module
//!
//! Pure and deterministic: seeded RNG at startup, no rendering or platform
//! dependencies. The host calls [`step`] once per frame with the elapsed time.

pub mod state;
pub mod step;

pub use state::{Particle, SimulationState};
pub use step::step;
