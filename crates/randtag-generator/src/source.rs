//! Random number sources.
//!
//! Every generator in this crate draws its randomness through the
//! [`RandomSource`] trait so callers can pick between throughput,
//! cryptographic strength and reproducibility without touching generator
//! code.

use crate::error::GeneratorError;
use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use std::cell::RefCell;
use std::fmt;
use std::sync::Mutex;

/// A source of random numbers shared by concurrent substitution passes.
///
/// Implementations only provide [`with_rng`](RandomSource::with_rng); the
/// sampling helpers are derived from it.
pub trait RandomSource: fmt::Debug + Send + Sync {
    /// Run `f` with a generator borrowed from this source.
    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore)) -> Result<(), GeneratorError>;

    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), GeneratorError> {
        self.with_rng(&mut |rng| rng.fill_bytes(dest))
    }

    /// Uniform integer in `min..=max`. Returns `min` when the range is empty.
    fn int_range(&self, min: usize, max: usize) -> Result<usize, GeneratorError> {
        if min >= max {
            return Ok(min);
        }
        let mut value = min;
        self.with_rng(&mut |rng| value = rng.random_range(min..=max))?;
        Ok(value)
    }

    /// Uniform index in `0..len`. Returns 0 for `len <= 1`.
    fn index(&self, len: usize) -> Result<usize, GeneratorError> {
        if len <= 1 {
            return Ok(0);
        }
        self.int_range(0, len - 1)
    }
}

thread_local! {
    static FAST_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_rng(&mut rand::rng()));
}

/// Fast non-cryptographic source backed by a thread-local `SmallRng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastSource;

impl RandomSource for FastSource {
    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore)) -> Result<(), GeneratorError> {
        FAST_RNG.with(|rng| f(&mut *rng.borrow_mut()));
        Ok(())
    }
}

/// Cryptographically secure source.
///
/// A fresh `StdRng` is seeded from the operating system on every call, so a
/// missing entropy source surfaces as [`GeneratorError::Entropy`] instead of
/// a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureSource;

impl RandomSource for SecureSource {
    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore)) -> Result<(), GeneratorError> {
        let mut rng =
            StdRng::try_from_os_rng().map_err(|e| GeneratorError::Entropy(e.to_string()))?;
        f(&mut rng);
        Ok(())
    }
}

/// Deterministic source for reproducible output.
///
/// Two sources created with the same seed yield the same sequence.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a new seeded source.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn with_rng(&self, f: &mut dyn FnMut(&mut dyn RngCore)) -> Result<(), GeneratorError> {
        // Poisoning is ignored, the generator state is always valid.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *rng);
        Ok(())
    }
}
