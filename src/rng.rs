//! Random source abstraction.
//!
//! The annealing engine and the perturbation operator draw randomness only
//! through [`RandomSource`], so tests can substitute a scripted generator and
//! assert exact moves and acceptance decisions. Every [`rand::Rng`] is a
//! `RandomSource` through a blanket implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws needed by the annealer.
pub trait RandomSource {
    /// Uniform integer in `[0, upper)`.
    ///
    /// Callers never pass `upper == 0`.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a seeded standard generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays fixed draws, cycling when a script runs out.
    ///
    /// An empty float script yields 0.999, which never accepts a worse move
    /// unless the score difference is tiny relative to the temperature.
    pub(crate) struct Scripted {
        indices: Vec<usize>,
        units: Vec<f64>,
        index_calls: usize,
        unit_calls: usize,
    }

    impl Scripted {
        pub(crate) fn new(indices: &[usize], units: &[f64]) -> Self {
            Self {
                indices: indices.to_vec(),
                units: units.to_vec(),
                index_calls: 0,
                unit_calls: 0,
            }
        }

        pub(crate) fn index_calls(&self) -> usize {
            self.index_calls
        }

        pub(crate) fn unit_calls(&self) -> usize {
            self.unit_calls
        }
    }

    impl RandomSource for Scripted {
        fn index(&mut self, upper: usize) -> usize {
            assert!(!self.indices.is_empty(), "unexpected index draw");
            let v = self.indices[self.index_calls % self.indices.len()];
            self.index_calls += 1;
            assert!(v < upper, "scripted index {v} out of range 0..{upper}");
            v
        }

        fn unit(&mut self) -> f64 {
            let v = if self.units.is_empty() {
                0.999
            } else {
                self.units[self.unit_calls % self.units.len()]
            };
            self.unit_calls += 1;
            v
        }
    }
}
