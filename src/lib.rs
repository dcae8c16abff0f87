//! Placeholder templating engine.
//!
//! `randtag` scans arbitrary byte buffers (HTTP request templates, config
//! stubs, fuzzing corpus entries) for `{RAND...}` tags and replaces each one
//! with freshly generated random data whose shape is declared in the tag.
//!
//! # Tag grammar
//!
//! ```text
//! {RAND[OM];[LENGTH];[TYPE]}
//!
//! LENGTH := N | N-M | N,M,...        one or two digits each
//! TYPE   := KEYWORD | KEYWORD,KEYWORD,...
//! ```
//!
//! Delimiters may also be percent-encoded (`%7B`, `%7D`, `%3B`) or written as
//! HTML entities (`&lbrace;`, `&rbrace;`, `&semi;`).
//!
//! # Architecture
//!
//! ```text
//! payload
//!    │
//!    ▼
//! TagScanner ──── Literal ─────────────────────────────┐
//!    │                                                 │
//!   Tag                                                │
//!    ▼                                                 ▼
//! normalize ─▶ parse_tag ─▶ keywords::resolve/generate ─▶ output
//! ```
//!
//! # Example
//!
//! ```rust
//! use randtag::Engine;
//!
//! let engine = Engine::new();
//! let out = engine.randomize_str("GET /users/{RAND;8;DIGIT} HTTP/1.1").unwrap();
//!
//! assert!(out.starts_with("GET /users/"));
//! assert_eq!(out.len(), "GET /users/ HTTP/1.1".len() + 8);
//! ```
//!
//! # Keywords
//!
//! - `ABL`, `ABU`, `ABR` - lowercase, uppercase, mixed-case letters
//! - `DIGIT` - decimal digits
//! - `HEX` - `LENGTH` random bytes as hex
//! - `UUID` - version 4 UUID
//! - `IPV4`, `IPV6` - random addresses
//! - `EMAIL` - `local@provider`
//! - `BYTES` - raw random bytes
//! - `SPACE` - spaces
//! - `NULL` - control bytes `0..=15`
//!
//! Custom keywords and charsets are registered through [`EngineBuilder`].

pub mod config;
pub mod encoding;
pub mod engine;
pub mod keywords;
pub mod normalize;
mod parser;
pub mod scanner;
pub mod settings;

// Re-exports for convenience
pub use config::{CustomKeywordGenerator, EngineBuilder, EngineConfig};
pub use encoding::{Dialect, InputEncoding, OutputEncoding};
pub use engine::Engine;
pub use keywords::Keyword;
pub use settings::{EngineSettings, SettingsError};

pub use randtag_generator::{
    FastSource, GeneratorError, RandomSource, SecureSource, SeededSource,
};
