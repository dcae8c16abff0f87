//! Uniform selection from a slice.

use crate::error::GeneratorError;
use crate::source::RandomSource;

/// Pick one element of `items` uniformly, or `None` when it is empty.
pub fn choose<'a, T>(
    source: &dyn RandomSource,
    items: &'a [T],
) -> Result<Option<&'a T>, GeneratorError> {
    if items.is_empty() {
        return Ok(None);
    }
    let idx = source.index(items.len())?;
    Ok(items.get(idx))
}
