/*
 * Boundary Module
 *
 * Walls are soft: inside the wall margin a boid is steered back towards the
 * interior at full speed, limited by the wall force budget. Boids are never
 * teleported or clamped to the bounds.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::vector;

/// Desired push direction for a boid at `position`, per axis independent.
pub fn edge_push(position: Vec2, params: &SimulationParams) -> Vec2 {
    let axis = |pos: f32, extent: f32| {
        if pos < params.wall_margin {
            params.max_speed
        } else if pos > extent - params.wall_margin {
            -params.max_speed
        } else {
            0.0
        }
    };

    vec2(
        axis(position.x, params.world_width),
        axis(position.y, params.world_height),
    )
}

/// Steer `boid` away from any wall it is close to.
pub fn apply_edge_avoidance(boid: &mut Boid, params: &SimulationParams) {
    let push = edge_push(boid.position, params);

    if vector::magnitude(push) > 0.0 {
        let desired = vector::normalize(push) * params.max_speed;
        let steer = vector::clamp_magnitude(desired - boid.velocity, params.max_wall_force);
        boid.velocity += steer;
    }
}
