//! Dense all-pairs 2D smoothed-particle hydrodynamics.
//!
//! A fluid block sits inside a ring of fixed boundary particles. Every
//! timestep reconstructs density over all particle pairs, derives pressure
//! from a clipped linear equation of state, and integrates gravity and
//! pressure forces with explicit Euler. Only fluid particles move.

pub mod config;
pub mod density;
pub mod error;
pub mod integrator;
pub mod kernel;
pub mod particle;
pub mod pressure;
pub mod scene;
pub mod snapshot;
pub mod solver;

pub use config::SimulationConfig;
pub use error::{Result, SphError};
pub use particle::ParticleSystem;
pub use snapshot::Frame;
pub use solver::Simulation;
