//! Tag scanner.
//!
//! Splits a buffer into literal spans and raw tag spans. A tag span runs from
//! a tag-open marker to the nearest following tag-close marker, both in any
//! accepted dialect, and includes both markers.

use crate::encoding::InputEncoding;
use crate::normalize::{encoded_markers, Role, TAG_CLOSE, TAG_OPEN};
use memchr::memchr3;

/// A piece of the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Bytes copied to the output unchanged.
    Literal(&'a [u8]),
    /// A complete raw tag, open and close markers included.
    Tag(&'a [u8]),
}

/// Marker spellings for one role, raw first.
#[derive(Debug, Clone)]
struct Markers {
    spellings: Vec<&'static [u8]>,
}

impl Markers {
    fn new(raw: &'static [u8], role: Role, accepted: InputEncoding) -> Self {
        let mut spellings = vec![raw];
        spellings.extend(encoded_markers(role, accepted));
        Self { spellings }
    }

    /// Find the first marker starting at or after `from`.
    ///
    /// Returns the start offset and marker length.
    fn find(&self, haystack: &[u8], from: usize) -> Option<(usize, usize)> {
        let mut cursor = from;
        while cursor < haystack.len() {
            let idx = memchr3(self.spellings[0][0], b'%', b'&', &haystack[cursor..])?;
            let pos = cursor + idx;
            let rest = &haystack[pos..];
            if let Some(marker) = self.spellings.iter().find(|m| rest.starts_with(m)) {
                return Some((pos, marker.len()));
            }
            cursor = pos + 1;
        }
        None
    }
}

/// Iterator over the [`Segment`]s of a buffer.
///
/// Every call to `next` consumes at least one byte, so scanning always
/// terminates. An unterminated tag is yielded as a literal.
#[derive(Debug, Clone)]
pub struct TagScanner<'a> {
    input: &'a [u8],
    cursor: usize,
    open: Markers,
    close: Markers,
    /// A tag found while yielding the literal in front of it.
    pending: Option<(usize, usize)>,
}

impl<'a> TagScanner<'a> {
    /// Create a scanner accepting the raw dialect plus `accepted`.
    pub fn new(input: &'a [u8], accepted: InputEncoding) -> Self {
        Self {
            input,
            cursor: 0,
            open: Markers::new(TAG_OPEN, Role::Open, accepted),
            close: Markers::new(TAG_CLOSE, Role::Close, accepted),
            pending: None,
        }
    }

    /// Whether the buffer contains a tag-open marker in any accepted dialect.
    pub fn contains_tag_open(&self) -> bool {
        self.open.find(self.input, 0).is_some()
    }

    fn take_literal(&mut self, end: usize) -> Segment<'a> {
        let literal = &self.input[self.cursor..end];
        self.cursor = end;
        Segment::Literal(literal)
    }

    fn take_tag(&mut self, start: usize, end: usize) -> Segment<'a> {
        let tag = &self.input[start..end];
        self.cursor = end;
        Segment::Tag(tag)
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((start, end)) = self.pending.take() {
            return Some(self.take_tag(start, end));
        }
        if self.cursor >= self.input.len() {
            return None;
        }

        let Some((open_at, open_len)) = self.open.find(self.input, self.cursor) else {
            return Some(self.take_literal(self.input.len()));
        };
        let Some((close_at, close_len)) = self.close.find(self.input, open_at + open_len) else {
            return Some(self.take_literal(self.input.len()));
        };

        let end = close_at + close_len;
        if open_at > self.cursor {
            self.pending = Some((open_at, end));
            return Some(self.take_literal(open_at));
        }
        Some(self.take_tag(open_at, end))
    }
}
