/*
 * Steering Module
 *
 * Turns a rule's raw accumulator into a bounded velocity change (Reynolds:
 * steering = desired - velocity, capped at the rule's force budget) and
 * applies it to the boid in place.
 */

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::rules::{Accumulator, SteeringSums};
use crate::vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Alignment,
    Cohesion,
    Separation,
}

impl Rule {
    /// The order the rules are applied in; each one sees the velocity the
    /// previous one produced.
    pub const ORDER: [Rule; 3] = [Rule::Alignment, Rule::Cohesion, Rule::Separation];

    pub fn max_force(self, params: &SimulationParams) -> f32 {
        match self {
            Rule::Alignment => params.max_alignment_force,
            Rule::Cohesion => params.max_cohesion_force,
            Rule::Separation => params.max_separation_force,
        }
    }

    // Alignment and separation average into a desired velocity
    pub fn caps_desired_velocity(self) -> bool {
        !matches!(self, Rule::Cohesion)
    }

    // Cohesion averages into a centroid that has to become a direction first
    pub fn targets_position(self) -> bool {
        matches!(self, Rule::Cohesion)
    }

    pub fn accumulator(self, sums: &SteeringSums) -> &Accumulator {
        match self {
            Rule::Alignment => &sums.alignment,
            Rule::Cohesion => &sums.cohesion,
            Rule::Separation => &sums.separation,
        }
    }
}

/// Apply one rule's steering to `boid`. Does nothing when no neighbor
/// contributed to `acc`.
pub fn apply_steering(
    boid: &mut Boid,
    acc: &Accumulator,
    max_force: f32,
    cap_desired_velocity: bool,
    subtract_position_first: bool,
    max_speed: f32,
) {
    if acc.count == 0 {
        return;
    }

    let mut steer = acc.sum / acc.count as f32;

    if subtract_position_first {
        steer -= boid.position;
    }

    if cap_desired_velocity {
        steer = vector::clamp_magnitude(steer, max_speed);
    }

    steer -= boid.velocity;
    steer = vector::clamp_magnitude(steer, max_force);

    boid.velocity += steer;
    boid.velocity = vector::clamp_magnitude(boid.velocity, max_speed);
}

/// Apply alignment, cohesion and separation in that order.
pub fn apply_rules(boid: &mut Boid, sums: &SteeringSums, params: &SimulationParams) {
    for rule in Rule::ORDER {
        apply_steering(
            boid,
            rule.accumulator(sums),
            rule.max_force(params),
            rule.caps_desired_velocity(),
            rule.targets_position(),
            params.max_speed,
        );
    }
}
