//! Injected source of randomness.
//!
//! Both random steps of fixture generation, drawing bytes and permuting
//! chunks, go through [`RandomSource`] so callers control seeding and tests
//! can substitute scripted behaviour.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Supplier of random bytes and random permutations.
pub trait RandomSource {
    /// Fills `dest` with independently drawn uniform bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Applies a uniform random permutation to `order` in place.
    fn shuffle(&mut self, order: &mut [usize]);
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        (**self).shuffle(order);
    }
}

/// [`RandomSource`] backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Creates a source seeded from operating system entropy.
    ///
    /// Output produced with this source is not reproducible across runs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a deterministic source from a 64-bit seed.
    ///
    /// The same seed always yields the same byte draws and the same chunk
    /// order for a given `rand` release.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill(dest);
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        // Fisher-Yates
        order.shuffle(&mut self.rng);
    }
}
