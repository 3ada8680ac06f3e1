//! Random invertible key generation.

use hill_core::{validated_key, HillError, KeyMatrix, Rows, MODULUS};
use rand::{CryptoRng, Rng, RngCore};
use tracing::debug;

/// Key generator parametrized by an RNG.
pub struct KeyGenerator<R: RngCore + CryptoRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly random `size`×`size` rows with entries in `[0, 26)`, not necessarily invertible.
    fn random_rows(&mut self, size: usize) -> Rows {
        (0..size)
            .map(|_| (0..size).map(|_| self.rng.gen_range(0..MODULUS)).collect())
            .collect()
    }

    /// Generates a random key that passes validation, retrying until one is found.
    pub fn random_invertible(&mut self, size: usize) -> Result<KeyMatrix, HillError> {
        if size != 2 && size != 3 {
            return Err(HillError::InvalidSize);
        }
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            if let Ok(key) = validated_key(&self.random_rows(size)) {
                debug!(size, attempts, "generated invertible key");
                return Ok(key);
            }
        }
    }
}
