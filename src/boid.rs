/*
 * Boid Module
 *
 * This module defines the Boid struct: a 2D kinematic point with a position
 * and a velocity in simulation space (origin top-left, y pointing down).
 * The flocking rules that move it live in `rules`, `steering`, `boundary`
 * and `physics`.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// A boid at the world centre with a random velocity.
    ///
    /// Each velocity component is drawn from `[0, max_speed)` and the result
    /// is capped at `max_speed`, so a fresh boid already respects the speed
    /// limit before its first step.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams) -> Self {
        let position = vec2(params.world_width / 2.0, params.world_height / 2.0);

        let vx = rng.gen_range(0.0..params.max_speed);
        let vy = rng.gen_range(0.0..params.max_speed);
        let velocity = vector::clamp_magnitude(vec2(vx, vy), params.max_speed);

        Self::new(position, velocity)
    }

    pub fn speed(&self) -> f32 {
        vector::magnitude(self.velocity)
    }

    // Heading angle in radians, for display only
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }
}
