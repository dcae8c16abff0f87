//! Tag body parser.
//!
//! A tag body is everything between `{RAND` and `}`:
//!
//! ```text
//! [OM] [ ; LENGTH [ ; TYPE ] ]
//!
//! LENGTH := N | N-M | N,M,...      (N, M: one or two ASCII digits)
//!
//! Range bounds may be zero; fixed values and choice entries may not.
//! TYPE   := KEYWORD | KEYWORD,KEYWORD,...
//! ```
//!
//! Parsing never fails hard. Invalid lengths become [`LengthSpec::Absent`] and
//! a body that does not start with the separator is reported as
//! [`ParsedTag::Malformed`] so the caller can re-emit it.

use crate::config::EngineConfig;
use crate::normalize::{SEPARATOR, TAG_OPEN_SUFFIX};
use randtag_generator::generators::{choice, numeric};
use randtag_generator::{GeneratorError, RandomSource};

const RANGE_MARKER: u8 = b'-';
const CHOICE_MARKER: u8 = b',';

/// Outcome of parsing one tag body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedTag<'t> {
    /// `{RAND}` or `{RANDOM}`: default length, default charset.
    Bare,
    /// Not a tag after all; re-emit the original text.
    Malformed,
    /// A tag with length and type fields.
    Spec(TagSpec<'t>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagSpec<'t> {
    pub(crate) length: LengthSpec,
    pub(crate) keyword: TypeSpec<'t>,
}

/// Declared length of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LengthSpec {
    Absent,
    Fixed(usize),
    /// Inclusive bounds, `min <= max`.
    Range { min: usize, max: usize },
    /// Non-empty list of valid lengths.
    Choice(Vec<usize>),
}

/// Declared type keyword of a tag, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeSpec<'t> {
    Absent,
    Single(&'t [u8]),
    Choice(Vec<&'t [u8]>),
}

impl LengthSpec {
    /// Pick a concrete length; `None` means use the default.
    pub(crate) fn resolve(
        &self,
        source: &dyn RandomSource,
    ) -> Result<Option<usize>, GeneratorError> {
        match self {
            LengthSpec::Absent => Ok(None),
            LengthSpec::Fixed(n) => Ok(Some(*n)),
            LengthSpec::Range { min, max } => numeric::int_range(source, *min, *max).map(Some),
            LengthSpec::Choice(values) => Ok(choice::choose(source, values)?.copied()),
        }
    }
}

impl<'t> TypeSpec<'t> {
    /// Pick a concrete keyword; `None` means the default charset.
    pub(crate) fn resolve(
        &self,
        source: &dyn RandomSource,
    ) -> Result<Option<&'t [u8]>, GeneratorError> {
        match self {
            TypeSpec::Absent => Ok(None),
            TypeSpec::Single(keyword) => Ok(Some(*keyword)),
            TypeSpec::Choice(keywords) => Ok(choice::choose(source, keywords)?.copied()),
        }
    }
}

/// Parse a canonical tag body (the bytes between `{RAND` and `}`).
pub(crate) fn parse_tag<'t>(body: &'t [u8], config: &EngineConfig) -> ParsedTag<'t> {
    let body = body.strip_prefix(TAG_OPEN_SUFFIX).unwrap_or(body);

    let Some((&first, fields)) = body.split_first() else {
        return ParsedTag::Bare;
    };
    if first != SEPARATOR {
        return ParsedTag::Malformed;
    }

    let spec = match split_once(fields, SEPARATOR) {
        Some((length_field, type_field)) => TagSpec {
            length: parse_length(length_field, config),
            keyword: parse_type(type_field, config),
        },
        None => {
            // A lone field is a length if it parses as one, a keyword otherwise.
            let length = parse_length(fields, config);
            let keyword = match length {
                LengthSpec::Absent => parse_type(fields, config),
                _ => TypeSpec::Absent,
            };
            TagSpec { length, keyword }
        }
    };
    ParsedTag::Spec(spec)
}

fn split_once(bytes: &[u8], marker: u8) -> Option<(&[u8], &[u8])> {
    let idx = memchr::memchr(marker, bytes)?;
    Some((&bytes[..idx], &bytes[idx + 1..]))
}

fn parse_length(field: &[u8], config: &EngineConfig) -> LengthSpec {
    if config.ranges_enabled() {
        if let Some((lo, hi)) = split_once(field, RANGE_MARKER) {
            return match (parse_digits(lo), parse_digits(hi)) {
                (Some(min), Some(max)) if min <= max && max <= config.max_length() => {
                    LengthSpec::Range { min, max }
                }
                _ => LengthSpec::Absent,
            };
        }
    }

    if config.length_choices_enabled() && field.contains(&CHOICE_MARKER) {
        let values: Vec<usize> = field
            .split(|&b| b == CHOICE_MARKER)
            .filter_map(|sub| declared_length(sub, config))
            .collect();
        return if values.is_empty() {
            LengthSpec::Absent
        } else {
            LengthSpec::Choice(values)
        };
    }

    declared_length(field, config).map_or(LengthSpec::Absent, LengthSpec::Fixed)
}

fn parse_type<'t>(field: &'t [u8], config: &EngineConfig) -> TypeSpec<'t> {
    if field.is_empty() {
        return TypeSpec::Absent;
    }
    if config.keyword_choices_enabled() && field.contains(&CHOICE_MARKER) {
        return TypeSpec::Choice(field.split(|&b| b == CHOICE_MARKER).collect());
    }
    TypeSpec::Single(field)
}

/// A one- or two-digit length within the configured bounds.
fn declared_length(field: &[u8], config: &EngineConfig) -> Option<usize> {
    let value = parse_digits(field)?;
    let min = config.min_length().max(1);
    (min..=config.max_length()).contains(&value).then_some(value)
}

/// Parse exactly one or two ASCII digits. Longer inputs are rejected.
fn parse_digits(field: &[u8]) -> Option<usize> {
    match field {
        &[d] if d.is_ascii_digit() => Some(usize::from(d - b'0')),
        &[d1, d2] if d1.is_ascii_digit() && d2.is_ascii_digit() => {
            Some(usize::from(d1 - b'0') * 10 + usize::from(d2 - b'0'))
        }
        _ => None,
    }
}
