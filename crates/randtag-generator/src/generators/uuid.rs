//! UUID value generator.

use crate::error::GeneratorError;
use crate::source::RandomSource;
use uuid::Uuid;

/// Generate a random UUID v4 from the given source.
pub fn uuid_v4(source: &dyn RandomSource) -> Result<Uuid, GeneratorError> {
    let mut bytes = [0u8; 16];
    source.fill_bytes(&mut bytes)?;

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Ok(Uuid::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeededSource;

    #[test]
    fn test_uuid_version() {
        let source = SeededSource::new(42);
        let uuid = uuid_v4(&source).unwrap();

        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_uuid_unique() {
        let source = SeededSource::new(42);
        assert_ne!(uuid_v4(&source).unwrap(), uuid_v4(&source).unwrap());
    }

    #[test]
    fn test_uuid_deterministic() {
        let a = uuid_v4(&SeededSource::new(42)).unwrap();
        let b = uuid_v4(&SeededSource::new(42)).unwrap();
        assert_eq!(a, b);
    }
}
