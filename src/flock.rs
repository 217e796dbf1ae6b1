/*
 * Flock Module
 *
 * The simulation context: owns the boids, the parameters, the neighbor query
 * and the running flag. The renderer borrows it read-only once per frame;
 * only `step` mutates the boids.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boid::Boid;
use crate::error::FlockError;
use crate::neighbors::{BruteForce, NeighborQuery};
use crate::params::SimulationParams;
use crate::physics;

pub struct Flock {
    boids: Vec<Boid>,
    params: SimulationParams,
    query: Box<dyn NeighborQuery>,
    // Reused by every neighbor query of a step
    candidates: Vec<usize>,
    frame: u64,
    running: bool,
}

impl Flock {
    /// Spawn `params.num_boids` boids from a seeded RNG.
    ///
    /// The same seed and parameters always produce the same flock.
    pub fn with_seed(params: SimulationParams, seed: u64) -> Result<Self, FlockError> {
        params.validate()?;

        let mut boids = Vec::new();
        boids
            .try_reserve_exact(params.num_boids)
            .map_err(|source| FlockError::Allocation { requested: params.num_boids, source })?;

        let mut rng = StdRng::seed_from_u64(seed);
        boids.extend((0..params.num_boids).map(|_| Boid::spawn(&mut rng, &params)));

        Self::from_boids(boids, params)
    }

    /// Wrap an existing set of boids. `params.num_boids` is replaced by the
    /// actual count.
    pub fn from_boids(boids: Vec<Boid>, params: SimulationParams) -> Result<Self, FlockError> {
        let params = SimulationParams { num_boids: boids.len(), ..params };
        params.validate()?;

        let mut candidates = Vec::new();
        candidates
            .try_reserve_exact(boids.len())
            .map_err(|source| FlockError::Allocation { requested: boids.len(), source })?;

        Ok(Self {
            boids,
            params,
            query: Box::new(BruteForce),
            candidates,
            frame: 0,
            running: true,
        })
    }

    /// Replace the neighbor query.
    pub fn with_query(mut self, query: Box<dyn NeighborQuery>) -> Self {
        self.query = query;
        self
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        let Self { boids, params, query, candidates, .. } = &mut *self;
        physics::update_boids(boids, &**query, candidates, params);
        self.frame += 1;
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn query_name(&self) -> &'static str {
        self.query.name()
    }

    // Number of completed steps
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn mean_speed(&self) -> f32 {
        if self.boids.is_empty() {
            return 0.0;
        }
        self.boids.iter().map(Boid::speed).sum::<f32>() / self.boids.len() as f32
    }
}
