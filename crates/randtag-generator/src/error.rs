//! Error types for random generation.

use thiserror::Error;

/// Errors raised by a [`RandomSource`](crate::RandomSource).
///
/// Only sources backed by the operating system can fail; the fast and
/// seeded sources never return an error.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The operating system entropy source could not be read.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),
}
