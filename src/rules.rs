/*
 * Steering Rules Module
 *
 * Gathers the raw inputs of the three flocking rules for one boid:
 * 1. Alignment: sum of neighbor velocities
 * 2. Cohesion: sum of neighbor positions
 * 3. Separation: sum of unit vectors pointing away from close neighbors
 *
 * The distance to each candidate is computed once and tested against the
 * three radii independently, so a neighbor may feed several rules.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::vector;

/// Running sum and contributor count of one rule for one boid and frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    pub sum: Vec2,
    pub count: u32,
}

impl Accumulator {
    pub const EMPTY: Accumulator = Accumulator { sum: Vec2::ZERO, count: 0 };

    #[inline]
    fn push(&mut self, v: Vec2) {
        self.sum += v;
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringSums {
    pub alignment: Accumulator,
    pub cohesion: Accumulator,
    pub separation: Accumulator,
}

/// Evaluate the three rules for `boids[index]` against the given candidates.
///
/// `candidates` come from a `NeighborQuery` and never contain `index`; a
/// stray self index is skipped anyway. Coincident boids (distance exactly
/// zero) count for alignment and cohesion but never for separation.
pub fn accumulate(
    boids: &[Boid],
    index: usize,
    candidates: &[usize],
    params: &SimulationParams,
) -> SteeringSums {
    let subject = &boids[index];
    let mut sums = SteeringSums::default();

    for &j in candidates {
        if j == index {
            continue;
        }
        let other = &boids[j];
        let dist = vector::distance(subject.position, other.position);

        if dist < params.alignment_radius {
            sums.alignment.push(other.velocity);
        }

        if dist < params.cohesion_radius {
            sums.cohesion.push(other.position);
        }

        if dist < params.separation_radius && dist != 0.0 {
            // Unit length: every close neighbor pushes equally hard
            let away = -(other.position - subject.position) / dist;
            sums.separation.push(away);
        }
    }

    sums
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_others(boids: &[Boid], index: usize) -> Vec<usize> {
        (0..boids.len()).filter(|&j| j != index).collect()
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn test_lonely_boid_has_empty_sums() {
        let boids = vec![
            Boid::new(vec2(100.0, 100.0), vec2(1.0, 0.0)),
            Boid::new(vec2(400.0, 100.0), vec2(0.0, 1.0)),
        ];
        let sums = accumulate(&boids, 0, &all_others(&boids, 0), &SimulationParams::default());

        assert!(sums.alignment.is_empty());
        assert!(sums.cohesion.is_empty());
        assert!(sums.separation.is_empty());
        assert_eq!(sums.alignment.sum, Vec2::ZERO);
    }

    #[test]
    fn test_separation_sums_unit_vectors() {
        // Neighbors at distance 5 and 10 both inside the separation radius
        let boids = vec![
            Boid::new(vec2(0.0, 0.0), Vec2::ZERO),
            Boid::new(vec2(3.0, 4.0), vec2(0.2, 0.0)),
            Boid::new(vec2(0.0, -10.0), vec2(0.0, 0.4)),
        ];
        let sums = accumulate(&boids, 0, &all_others(&boids, 0), &SimulationParams::default());

        // (-0.6, -0.8) + (0.0, 1.0): no extra 1/d weighting
        assert_eq!(sums.separation.count, 2);
        assert!(approx(sums.separation.sum, vec2(-0.6, 0.2)));

        assert_eq!(sums.alignment.count, 2);
        assert!(approx(sums.alignment.sum, vec2(0.2, 0.4)));

        assert_eq!(sums.cohesion.count, 2);
        assert!(approx(sums.cohesion.sum, vec2(3.0, -6.0)));
    }

    #[test]
    fn test_radii_are_independent_and_strict() {
        let boids = vec![
            Boid::new(vec2(200.0, 200.0), Vec2::ZERO),
            // Exactly on the separation radius: alignment and cohesion only
            Boid::new(vec2(212.0, 200.0), vec2(1.0, 0.0)),
            // Exactly on the alignment/cohesion radius: nothing
            Boid::new(vec2(200.0, 230.0), vec2(0.0, 1.0)),
        ];
        let sums = accumulate(&boids, 0, &all_others(&boids, 0), &SimulationParams::default());

        assert_eq!(sums.separation.count, 0);
        assert_eq!(sums.alignment.count, 1);
        assert_eq!(sums.cohesion.count, 1);
        assert_eq!(sums.alignment.sum, vec2(1.0, 0.0));
        assert_eq!(sums.cohesion.sum, vec2(212.0, 200.0));
    }

    #[test]
    fn test_coincident_neighbor_skips_separation() {
        let boids = vec![
            Boid::new(vec2(50.0, 50.0), vec2(0.5, 0.0)),
            Boid::new(vec2(50.0, 50.0), vec2(0.0, 0.5)),
        ];
        let sums = accumulate(&boids, 0, &all_others(&boids, 0), &SimulationParams::default());

        assert_eq!(sums.separation, Accumulator::EMPTY);
        assert_eq!(sums.alignment.count, 1);
        assert_eq!(sums.cohesion.count, 1);
        assert!(sums.separation.sum.x.is_finite() && sums.separation.sum.y.is_finite());
    }

    #[test]
    fn test_self_index_is_ignored() {
        let boids = vec![
            Boid::new(vec2(10.0, 10.0), vec2(1.0, 0.0)),
            Boid::new(vec2(15.0, 10.0), vec2(0.0, 1.0)),
        ];
        let sums = accumulate(&boids, 0, &[0, 1, 0], &SimulationParams::default());

        assert_eq!(sums.alignment.count, 1);
        assert_eq!(sums.alignment.sum, vec2(0.0, 1.0));
    }
}
