//! Deterministic RNG wrapper and run-seed derivation.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Exclusive upper bound of the intermediate draw used when reseeding a run.
pub const RESEED_BOUND: u64 = 10_000;

/// Deterministic RNG handle handed to experiment runs.
///
/// The handle is a thin wrapper around `StdRng` that documents the seeding
/// policy used by the driver. Each run is identified by its index, which is
/// used as a first seed; the RNG actually used by the run is seeded from a
/// single draw in `0..RESEED_BOUND` of that first generator (see
/// [`derive_run_seed`]). The rule is deterministic for a given `StdRng`
/// implementation.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for run `seed` following the double seeding rule.
    pub fn for_run(seed: u64) -> Self {
        Self::from_seed(derive_run_seed(seed))
    }

    /// Draws a uniform sample in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the seed actually used by run `seed`.
pub fn derive_run_seed(seed: u64) -> u64 {
    let mut first = StdRng::seed_from_u64(seed);
    first.gen_range(0..RESEED_BOUND)
}
