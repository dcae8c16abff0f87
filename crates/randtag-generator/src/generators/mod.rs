//! Primitive value generators.
//!
//! Each generator draws from a [`RandomSource`](crate::RandomSource) and
//! either returns its value or appends it to a caller-owned buffer, so the
//! engine can write substitutions straight into its output.

pub mod bytes;
pub mod choice;
pub mod network;
pub mod numeric;
pub mod string;
pub mod uuid;
