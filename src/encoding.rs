//! Input dialects and output encodings.

use bitflags::bitflags;
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

bitflags! {
    /// Encoded delimiter dialects accepted on input.
    ///
    /// The raw dialect (`{`, `}`, `;`) is always accepted and has no flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputEncoding: u8 {
        /// Percent-encoded delimiters: `%7B`, `%7D`, `%3B`.
        const URL = 1;
        /// HTML entity delimiters: `&lbrace;`, `&rbrace;`, `&semi;`.
        const HTML = 1 << 1;
    }
}

impl Default for InputEncoding {
    fn default() -> Self {
        Self::URL | Self::HTML
    }
}

/// A single encoded dialect, as named in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Url,
    Html,
}

impl From<Dialect> for InputEncoding {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Url => InputEncoding::URL,
            Dialect::Html => InputEncoding::HTML,
        }
    }
}

/// Transform applied to each generated substitution before it is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// Write generated bytes as-is.
    #[default]
    None,
    /// Percent-encode everything outside the unreserved set.
    Url,
    /// Escape `& < > " '` as HTML entities.
    Html,
}

/// RFC 3986 unreserved characters are left alone.
const URL_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

impl OutputEncoding {
    /// Append `bytes` to `out` in this encoding.
    pub fn write(self, bytes: &[u8], out: &mut Vec<u8>) {
        match self {
            OutputEncoding::None => out.extend_from_slice(bytes),
            OutputEncoding::Url => {
                for chunk in percent_encode(bytes, URL_UNRESERVED) {
                    out.extend_from_slice(chunk.as_bytes());
                }
            }
            OutputEncoding::Html => {
                for &b in bytes {
                    match b {
                        b'&' => out.extend_from_slice(b"&amp;"),
                        b'<' => out.extend_from_slice(b"&lt;"),
                        b'>' => out.extend_from_slice(b"&gt;"),
                        b'"' => out.extend_from_slice(b"&quot;"),
                        b'\'' => out.extend_from_slice(b"&#39;"),
                        _ => out.push(b),
                    }
                }
            }
        }
    }
}
