//! Deterministic RNG construction.
//!
//! Randomized solvers take an optional `u64` seed and must produce the same
//! output for the same seed on every platform, so RNGs are always built
//! through [`create_rng`] rather than from host defaults.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded RNG with reproducible output.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
