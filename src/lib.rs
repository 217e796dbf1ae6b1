/*
 * Boid Swarm - Module Definitions
 *
 * The simulation core (vector math, rules, steering, walls, the step and the
 * flock context) is independent of the window; `app`, `renderer`, `ui`,
 * `input` and `debug` form the nannou shell around it.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use error::FlockError;
pub use flock::Flock;
pub use neighbors::{BruteForce, NeighborQuery};
pub use params::SimulationParams;
pub use rules::{Accumulator, SteeringSums};
pub use steering::Rule;

// Simulation core
pub mod boid;
pub mod boundary;
pub mod error;
pub mod flock;
pub mod neighbors;
pub mod params;
pub mod physics;
pub mod rules;
pub mod steering;
pub mod vector;

// Window shell
pub mod app;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;
