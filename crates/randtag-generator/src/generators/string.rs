//! Charset-based string generator.

use crate::error::GeneratorError;
use crate::source::RandomSource;
use rand::seq::IndexedRandom;

/// Append `length` bytes drawn uniformly from `charset` to `out`.
///
/// An empty charset appends nothing.
pub fn from_charset(
    source: &dyn RandomSource,
    length: usize,
    charset: &[u8],
    out: &mut Vec<u8>,
) -> Result<(), GeneratorError> {
    if charset.is_empty() || length == 0 {
        return Ok(());
    }

    out.reserve(length);
    source.with_rng(&mut |rng| {
        out.extend((0..length).filter_map(|_| charset.choose(rng).copied()));
    })
}

/// Append `length` copies of `byte` to `out`.
pub fn repeat(length: usize, byte: u8, out: &mut Vec<u8>) {
    out.resize(out.len() + length, byte);
}
