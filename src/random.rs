//! Source of randomness for refresh.

use rand::Rng;

/// Draws an index for a refresh.
pub trait RandomSource {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform draws from the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
