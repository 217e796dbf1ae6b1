/*
 * Boid Swarm Simulation
 *
 * A flock of boids steered by three local rules plus soft walls:
 * 1. Alignment: steer towards the average heading of neighbors
 * 2. Cohesion: steer towards the average position of neighbors
 * 3. Separation: steer away from crowding neighbors
 *
 * Every frame runs one simulation step and draws the result. Set RUST_LOG
 * to change the log level and BOIDS_SEED to replay a run.
 */

use anyhow::Context;

use boid_swarm::app;
use boid_swarm::SimulationParams;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    SimulationParams::default()
        .validate()
        .context("Built-in simulation parameters are inconsistent")?;

    log::info!("Boid swarm starting...");

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();

    Ok(())
}
