//! Encoded delimiter normalization.
//!
//! Tags may arrive percent-encoded (`%7BRAND%3B8%7D`) or HTML-entity encoded
//! (`&lbrace;RAND&semi;8&rbrace;`). Before parsing, every encoded delimiter of
//! an accepted dialect is rewritten to its canonical raw form.

use crate::encoding::InputEncoding;
use memchr::memchr2;
use std::borrow::Cow;

/// Canonical tag-open marker.
pub const TAG_OPEN: &[u8] = b"{RAND";
/// Optional suffix turning `{RAND` into `{RANDOM`.
pub const TAG_OPEN_SUFFIX: &[u8] = b"OM";
/// Canonical tag-close marker.
pub const TAG_CLOSE: &[u8] = b"}";
/// Canonical field separator.
pub const SEPARATOR: u8 = b';';

/// Role a delimiter plays in the tag grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Open,
    Close,
    Separator,
}

/// An encoded spelling of a canonical delimiter.
#[derive(Debug)]
pub(crate) struct EncodedDelimiter {
    pub(crate) dialect: InputEncoding,
    pub(crate) role: Role,
    pub(crate) encoded: &'static [u8],
    pub(crate) canonical: &'static [u8],
}

pub(crate) static ENCODED_DELIMITERS: [EncodedDelimiter; 6] = [
    EncodedDelimiter {
        dialect: InputEncoding::URL,
        role: Role::Open,
        encoded: b"%7BRAND",
        canonical: TAG_OPEN,
    },
    EncodedDelimiter {
        dialect: InputEncoding::HTML,
        role: Role::Open,
        encoded: b"&lbrace;RAND",
        canonical: TAG_OPEN,
    },
    EncodedDelimiter {
        dialect: InputEncoding::URL,
        role: Role::Close,
        encoded: b"%7D",
        canonical: TAG_CLOSE,
    },
    EncodedDelimiter {
        dialect: InputEncoding::HTML,
        role: Role::Close,
        encoded: b"&rbrace;",
        canonical: TAG_CLOSE,
    },
    EncodedDelimiter {
        dialect: InputEncoding::URL,
        role: Role::Separator,
        encoded: b"%3B",
        canonical: b";",
    },
    EncodedDelimiter {
        dialect: InputEncoding::HTML,
        role: Role::Separator,
        encoded: b"&semi;",
        canonical: b";",
    },
];

/// Encoded spellings of `role` accepted under `accepted`.
pub(crate) fn encoded_markers(
    role: Role,
    accepted: InputEncoding,
) -> impl Iterator<Item = &'static [u8]> {
    ENCODED_DELIMITERS
        .iter()
        .filter(move |d| d.role == role && accepted.contains(d.dialect))
        .map(|d| d.encoded)
}

/// Rewrite encoded delimiters of the accepted dialects to their raw form.
///
/// Runs as one left-to-right pass; rewritten output is never rescanned, so a
/// canonical marker hidden inside an encoded one is not unwrapped twice.
/// Returns the input borrowed when there is nothing to rewrite.
pub fn normalize(input: &[u8], accepted: InputEncoding) -> Cow<'_, [u8]> {
    if accepted.is_empty() || memchr2(b'%', b'&', input).is_none() {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(input.len());
    let mut cursor = 0;

    while let Some(idx) = memchr2(b'%', b'&', &input[cursor..]) {
        let pos = cursor + idx;
        out.extend_from_slice(&input[cursor..pos]);

        let rest = &input[pos..];
        match ENCODED_DELIMITERS
            .iter()
            .find(|d| accepted.contains(d.dialect) && rest.starts_with(d.encoded))
        {
            Some(delimiter) => {
                out.extend_from_slice(delimiter.canonical);
                cursor = pos + delimiter.encoded.len();
            }
            None => {
                out.push(input[pos]);
                cursor = pos + 1;
            }
        }
    }
    out.extend_from_slice(&input[cursor..]);

    Cow::Owned(out)
}
