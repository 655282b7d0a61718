//! Shared Random Source
//!
//! One seeded PRNG shared by every random pattern. Not suitable for
//! cryptographic use.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Clonable handle to a single mutex-guarded PRNG.
///
/// Clones share state: two generators built from clones of one source draw
/// from the same stream.
#[derive(Clone)]
pub struct RandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomSource {
    /// Seed once from operating-system entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic source for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Overwrite `buf` with bytes uniform over `0..=255`.
    pub fn fill_bytes(&self, buf: &mut [u8]) {
        self.lock().fill_bytes(buf);
    }

    /// Overwrite `buf` with bytes drawn uniformly from `alphabet`.
    ///
    /// An empty alphabet leaves `buf` untouched.
    pub fn fill_from_alphabet(&self, buf: &mut [u8], alphabet: &[u8]) {
        if alphabet.is_empty() {
            return;
        }
        let mut rng = self.lock();
        for byte in buf.iter_mut() {
            *byte = alphabet[rng.random_range(0..alphabet.len())];
        }
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}
