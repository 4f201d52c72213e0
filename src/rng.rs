//! Seedable randomness for the stochastic filters.
//!
//! Pixel swap, grain and the nostalgic grain stage draw from an explicitly
//! passed generator. Hosts that want reproducible output create one with
//! [`create_rng`]; hosts that don't can use [`entropy_rng`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Generator type used throughout the crate.
pub type FilterRng = Pcg32;

/// Creates a PCG32 generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> FilterRng {
    Pcg32::seed_from_u64(seed)
}

/// Creates a PCG32 generator seeded from OS entropy.
pub fn entropy_rng() -> FilterRng {
    Pcg32::from_entropy()
}
