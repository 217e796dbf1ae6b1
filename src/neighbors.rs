/*
 * Neighbor Query Module
 *
 * The steering rules only need to know which boids *might* be close enough
 * to matter. That question sits behind the `NeighborQuery` trait so a
 * spatial index can replace the brute-force scan without touching the rules.
 */

use crate::boid::Boid;

/// A pluggable source of neighbor candidates.
pub trait NeighborQuery {
    /// Fill `out` with the indices of every boid that may lie within `radius`
    /// of `boids[index]`. The rules sum contributions in the order given.
    ///
    /// `index` itself must never be reported. Candidates farther than
    /// `radius` are allowed; the rules filter by exact distance.
    fn candidates(&self, boids: &[Boid], index: usize, radius: f32, out: &mut Vec<usize>);

    /// Human-readable name for display/debugging.
    fn name(&self) -> &'static str;
}

/// Reports every other boid in ascending index order. O(n) per query,
/// O(n²) per frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl NeighborQuery for BruteForce {
    fn candidates(&self, boids: &[Boid], index: usize, _radius: f32, out: &mut Vec<usize>) {
        out.clear();
        out.extend((0..boids.len()).filter(|&j| j != index));
    }

    fn name(&self) -> &'static str {
        "BruteForce"
    }
}
