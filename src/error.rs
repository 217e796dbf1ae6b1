/*
 * Error Module
 *
 * Startup failures of the simulation. Once a flock exists the per-frame
 * update has no failure path.
 */

use std::collections::TryReserveError;
use std::fmt;

#[derive(Debug)]
pub enum FlockError {
    /// The agent collection could not be allocated.
    Allocation {
        requested: usize,
        source: TryReserveError,
    },
    /// A parameter set that the step cannot run with.
    InvalidParams(String),
}

impl fmt::Display for FlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlockError::Allocation { requested, .. } => {
                write!(f, "failed to allocate storage for {} boids", requested)
            }
            FlockError::InvalidParams(reason) => write!(f, "invalid simulation parameters: {}", reason),
        }
    }
}

impl std::error::Error for FlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlockError::Allocation { source, .. } => Some(source),
            FlockError::InvalidParams(_) => None,
        }
    }
}
