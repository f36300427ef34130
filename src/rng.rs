//! Default random source.
//!
//! Generators accept any [`rand::Rng`]; this module only fixes a fast, seedable default so that
//! a single seed reproduces a whole sequence of generator calls across platforms.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Random source used in documentation and tests
pub type DefaultRng = Pcg64Mcg;

/// Returns a [`DefaultRng`] seeded with `seed`
pub fn seeded(seed: u64) -> DefaultRng {
    DefaultRng::seed_from_u64(seed)
}
