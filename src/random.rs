//! Seeded random number generation.
//!
//! Stochastic code in this crate never reaches for a global generator: it
//! takes `&mut impl Rng` from the caller. [`create_rng`] is the one place
//! seeds turn into generators.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used for seeded runs.
pub type TspRng = Xoshiro256PlusPlus;

/// Creates a reproducible generator from `seed`.
pub fn create_rng(seed: u64) -> TspRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
