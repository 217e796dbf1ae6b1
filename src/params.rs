/*
 * Simulation Parameters Module
 *
 * All tunables of the swarm are fixed at compile time. The constants below
 * are the values the simulation runs with; `SimulationParams` bundles them
 * into one value that is handed to every step so tests can build smaller
 * worlds without touching the constants.
 */

use crate::error::FlockError;

// Population and world
pub const NUM_BOIDS: usize = 2000;
pub const WORLD_WIDTH: f32 = 1920.0 * 0.75;
pub const WORLD_HEIGHT: f32 = 1080.0 * 0.75;

// Perception radii
pub const SEPARATION_RADIUS: f32 = 12.0;
pub const ALIGNMENT_RADIUS: f32 = 30.0;
pub const COHESION_RADIUS: f32 = 30.0;

// Per-rule steering budgets
pub const MAX_SEPARATION_FORCE: f32 = 0.02;
pub const MAX_ALIGNMENT_FORCE: f32 = 0.004;
pub const MAX_COHESION_FORCE: f32 = 0.004;
pub const MAX_WALL_FORCE: f32 = 0.03;

// Walls and speed limits
pub const WALL_MARGIN: f32 = 100.0;
pub const MAX_SPEED: f32 = 1.0;
pub const MIN_SPEED: f32 = 0.5;

/// Parameters every simulation step reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub world_width: f32,
    pub world_height: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub max_separation_force: f32,
    pub max_alignment_force: f32,
    pub max_cohesion_force: f32,
    pub max_wall_force: f32,
    pub wall_margin: f32,
    pub max_speed: f32,
    pub min_speed: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: NUM_BOIDS,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            separation_radius: SEPARATION_RADIUS,
            alignment_radius: ALIGNMENT_RADIUS,
            cohesion_radius: COHESION_RADIUS,
            max_separation_force: MAX_SEPARATION_FORCE,
            max_alignment_force: MAX_ALIGNMENT_FORCE,
            max_cohesion_force: MAX_COHESION_FORCE,
            max_wall_force: MAX_WALL_FORCE,
            wall_margin: WALL_MARGIN,
            max_speed: MAX_SPEED,
            min_speed: MIN_SPEED,
        }
    }
}

impl SimulationParams {
    // Largest radius any rule looks at; the neighbor query must cover it
    pub fn max_perception_radius(&self) -> f32 {
        f32::max(
            self.separation_radius,
            f32::max(self.alignment_radius, self.cohesion_radius),
        )
    }

    /// Reject parameter sets the step cannot run with.
    pub fn validate(&self) -> Result<(), FlockError> {
        let invalid = |reason: &str| Err(FlockError::InvalidParams(reason.to_string()));

        if self.num_boids == 0 {
            return invalid("num_boids must be at least 1");
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid("world dimensions must be positive");
        }
        if !(self.separation_radius > 0.0 && self.alignment_radius > 0.0 && self.cohesion_radius > 0.0) {
            return invalid("perception radii must be positive");
        }
        let forces = [
            self.max_separation_force,
            self.max_alignment_force,
            self.max_cohesion_force,
            self.max_wall_force,
        ];
        if forces.iter().any(|&f| !(f > 0.0)) {
            return invalid("steering force caps must be positive");
        }
        if !(self.min_speed > 0.0 && self.min_speed <= self.max_speed) {
            return invalid("speeds must satisfy 0 < min_speed <= max_speed");
        }
        if self.wall_margin < 0.0
            || self.world_width <= 2.0 * self.wall_margin
            || self.world_height <= 2.0 * self.wall_margin
        {
            return invalid("world must be wider and taller than twice the wall margin");
        }

        Ok(())
    }
}
