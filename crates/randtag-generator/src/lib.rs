//! Random sources and primitive generators for the randtag engine.
//!
//! This crate provides the building blocks the placeholder engine draws
//! from: a [`RandomSource`] abstraction with fast, secure and seeded
//! implementations, the predefined character-class tables, and a set of
//! small generators (strings, raw bytes, UUIDs, IP addresses, choices).
//!
//! # Architecture
//!
//! ```text
//!   RandomSource (trait)
//!   ├── FastSource    thread-local SmallRng
//!   ├── SecureSource  StdRng seeded from the OS per call
//!   └── SeededSource  Mutex<StdRng>, deterministic
//!          │
//!          ▼
//!   generators::{string, bytes, uuid, network, numeric, choice}
//! ```
//!
//! # Example
//!
//! ```rust
//! use randtag_generator::{charsets, generators, SeededSource};
//!
//! let source = SeededSource::new(42);
//! let mut out = Vec::new();
//! generators::string::from_charset(&source, 8, charsets::DIGITS, &mut out).unwrap();
//! assert_eq!(out.len(), 8);
//! assert!(out.iter().all(u8::is_ascii_digit));
//! ```

pub mod charsets;
pub mod error;
pub mod generators;
pub mod providers;
pub mod source;

// Re-exports for convenience
pub use error::GeneratorError;
pub use providers::safe_mail_providers;
pub use source::{FastSource, RandomSource, SecureSource, SeededSource};
