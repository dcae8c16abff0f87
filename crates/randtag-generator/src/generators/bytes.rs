//! Raw byte and hex generators.

use crate::error::GeneratorError;
use crate::source::RandomSource;

/// Generate `length` random bytes.
pub fn random_bytes(source: &dyn RandomSource, length: usize) -> Result<Vec<u8>, GeneratorError> {
    let mut bytes = vec![0u8; length];
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Generate `length` random bytes rendered as `2 * length` lowercase hex characters.
pub fn random_hex(source: &dyn RandomSource, length: usize) -> Result<String, GeneratorError> {
    Ok(hex::encode(random_bytes(source, length)?))
}
