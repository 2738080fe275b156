//! Random permutation through an explicitly passed RNG handle.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform random permutation of `0..size`.
///
/// Zero-based, unlike the one-based convention being emulated. The RNG is
/// owned and seeded by the top-level caller and threaded through every
/// stochastic operation, so rewiring runs are reproducible from one seed.
pub fn randperm<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<usize> {
    let mut values: Vec<usize> = (0..size).collect();
    values.shuffle(rng);
    values
}
