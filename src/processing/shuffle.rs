//! Random ordering of expanded addresses.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shuffle `items` in place into a uniformly random permutation.
///
/// Walks forward from the second element, swapping each position `i` with a
/// random position in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in 1..items.len() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Build the random source for a run.
///
/// A fixed `seed` gives a reproducible order. Without one a fresh seed is
/// drawn and logged so the run can be repeated.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    log::debug!("shuffle seed={seed}");
    StdRng::seed_from_u64(seed)
}
