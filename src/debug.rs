/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and flock statistics displayed in the stats panel and logged periodically.
 */

use std::time::Duration;

use crate::flock::Flock;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames: u64,
    pub boids: usize,
    pub mean_speed: f32,
    pub seed: u64,
    pub neighbor_query: &'static str,
}

impl DebugInfo {
    pub fn new(seed: u64, flock: &Flock) -> Self {
        let mut info = Self { seed, ..Self::default() };
        info.record(flock);
        info
    }

    // Refresh the flock statistics after a step
    pub fn record(&mut self, flock: &Flock) {
        self.frames = flock.frame();
        self.boids = flock.len();
        self.mean_speed = flock.mean_speed();
        self.neighbor_query = flock.query_name();
    }
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            frames: 0,
            boids: 0,
            mean_speed: 0.0,
            seed: 0,
            neighbor_query: "",
        }
    }
}
