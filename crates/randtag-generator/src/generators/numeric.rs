//! Numeric value generators.

use crate::error::GeneratorError;
use crate::source::RandomSource;

/// Generate a random integer in the given range (inclusive).
///
/// When `min > max` the bounds are swapped.
pub fn int_range(
    source: &dyn RandomSource,
    min: usize,
    max: usize,
) -> Result<usize, GeneratorError> {
    if min > max {
        return source.int_range(max, min);
    }
    source.int_range(min, max)
}
