/*
 * Physics Module
 *
 * One simulation step for the whole flock. Boids are updated in place, in
 * index order, in a single pass: when boid `i` looks at its neighbors it
 * already sees the new velocity and position of every boid before it. The
 * result therefore depends on array order, and that order is part of the
 * simulation's deterministic behavior.
 *
 * Per boid the step is:
 * 1. Wall avoidance
 * 2. Alignment, cohesion and separation against the live array
 * 3. Minimum speed floor
 * 4. Position integration (one frame = one time unit)
 */

use crate::boid::Boid;
use crate::boundary;
use crate::neighbors::NeighborQuery;
use crate::params::SimulationParams;
use crate::rules;
use crate::steering;
use crate::vector;

/// Raise a slow boid to exactly `min_speed`, keeping its direction.
///
/// A boid with zero velocity has no direction to keep and stays at zero.
pub fn enforce_min_speed(boid: &mut Boid, min_speed: f32) {
    if vector::magnitude(boid.velocity) < min_speed {
        boid.velocity = vector::normalize(boid.velocity) * min_speed;
    }
}

#[inline]
pub fn integrate(boid: &mut Boid) {
    boid.position += boid.velocity;
}

/// Update `boids[index]` in place.
///
/// `candidates` is scratch space for the neighbor query so the per-frame
/// loop does not allocate.
pub fn update_boid(
    boids: &mut [Boid],
    index: usize,
    query: &dyn NeighborQuery,
    candidates: &mut Vec<usize>,
    params: &SimulationParams,
) {
    boundary::apply_edge_avoidance(&mut boids[index], params);

    query.candidates(boids, index, params.max_perception_radius(), candidates);
    let sums = rules::accumulate(boids, index, candidates, params);

    let boid = &mut boids[index];
    steering::apply_rules(boid, &sums, params);
    enforce_min_speed(boid, params.min_speed);
    integrate(boid);
}

// Update every boid once, in index order
pub fn update_boids(
    boids: &mut [Boid],
    query: &dyn NeighborQuery,
    candidates: &mut Vec<usize>,
    params: &SimulationParams,
) {
    for index in 0..boids.len() {
        update_boid(boids, index, query, candidates, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::BruteForce;
    use nannou::prelude::*;

    #[test]
    fn test_min_speed_rescales_slow_boid() {
        let mut boid = Boid::new(Vec2::ZERO, vec2(0.3, 0.0));
        enforce_min_speed(&mut boid, 0.5);
        assert_eq!(boid.velocity, vec2(0.5, 0.0));

        let mut boid = Boid::new(Vec2::ZERO, vec2(0.0, -0.1));
        enforce_min_speed(&mut boid, 0.5);
        assert_eq!(boid.velocity, vec2(0.0, -0.5));
    }

    #[test]
    fn test_min_speed_leaves_fast_boid_alone() {
        let mut boid = Boid::new(Vec2::ZERO, vec2(0.5, 0.0));
        enforce_min_speed(&mut boid, 0.5);
        assert_eq!(boid.velocity, vec2(0.5, 0.0));

        let mut boid = Boid::new(Vec2::ZERO, vec2(0.6, 0.6));
        enforce_min_speed(&mut boid, 0.5);
        assert_eq!(boid.velocity, vec2(0.6, 0.6));
    }

    #[test]
    fn test_zero_velocity_stays_stuck() {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::ZERO);
        enforce_min_speed(&mut boid, 0.5);
        assert_eq!(boid.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_adds_velocity() {
        let mut boid = Boid::new(vec2(10.0, 20.0), vec2(0.5, -0.25));
        integrate(&mut boid);
        assert_eq!(boid.position, vec2(10.5, 19.75));
    }

    #[test]
    fn test_update_sees_earlier_updates() {
        let params = SimulationParams::default();
        // Two boids 11 apart: boid 1 reads boid 0 after boid 0 has moved
        let initial = vec![
            Boid::new(vec2(700.0, 400.0), vec2(0.5, 0.0)),
            Boid::new(vec2(711.0, 400.0), vec2(0.0, 0.5)),
        ];

        let mut live = initial.clone();
        let mut scratch = Vec::new();
        update_boids(&mut live, &BruteForce, &mut scratch, &params);

        // Boid 0 is updated against the untouched boid 1 either way
        let mut snapshot_zero = initial.clone();
        update_boid(&mut snapshot_zero, 0, &BruteForce, &mut scratch, &params);
        assert_eq!(live[0], snapshot_zero[0]);

        // Boid 1 against the *old* boid 0 would differ
        let mut stale = initial.clone();
        update_boid(&mut stale, 1, &BruteForce, &mut scratch, &params);
        assert_ne!(live[1], stale[1]);
    }

    #[test]
    fn test_empty_flock_is_noop() {
        let mut boids: Vec<Boid> = Vec::new();
        let mut scratch = Vec::new();
        update_boids(&mut boids, &BruteForce, &mut scratch, &SimulationParams::default());
        assert!(boids.is_empty());
    }
}
