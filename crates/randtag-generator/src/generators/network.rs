//! IP address generators.

use crate::error::GeneratorError;
use crate::source::RandomSource;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Generate a random IPv4 address.
pub fn ipv4(source: &dyn RandomSource) -> Result<Ipv4Addr, GeneratorError> {
    let mut octets = [0u8; 4];
    source.fill_bytes(&mut octets)?;
    Ok(Ipv4Addr::from(octets))
}

/// Generate a random IPv6 address.
pub fn ipv6(source: &dyn RandomSource) -> Result<Ipv6Addr, GeneratorError> {
    let mut octets = [0u8; 16];
    source.fill_bytes(&mut octets)?;
    Ok(Ipv6Addr::from(octets))
}
