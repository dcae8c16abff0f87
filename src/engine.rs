//! The substitution engine.

use crate::config::{EngineBuilder, EngineConfig};
use crate::encoding::OutputEncoding;
use crate::keywords;
use crate::normalize::{normalize, TAG_CLOSE, TAG_OPEN};
use crate::parser::{parse_tag, ParsedTag};
use crate::scanner::{Segment, TagScanner};
use randtag_generator::{FastSource, GeneratorError, RandomSource};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// Replaces `{RAND...}` tags in byte buffers with random data.
///
/// A pass only reads the configuration, so one engine can serve concurrent
/// passes from several threads. Reconfiguring ([`Engine::reset`]) requires
/// exclusive access.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    source: Arc<dyn RandomSource>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with default settings and the fast random source.
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(config: EngineConfig, source: Arc<dyn RandomSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restore factory defaults, dropping custom keywords, charsets and source.
    pub fn reset(&mut self) {
        self.config = EngineConfig::default();
        self.source = Arc::new(FastSource);
    }

    /// Replace every tag in `payload`.
    ///
    /// Bytes outside tags are copied unchanged. A payload without any tag-open
    /// marker is returned borrowed. The only error is a failure of the random
    /// source itself.
    pub fn randomize<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>, GeneratorError> {
        let scanner = TagScanner::new(payload, self.config.input_encoding());
        if !scanner.contains_tag_open() {
            return Ok(Cow::Borrowed(payload));
        }

        let mut out = Vec::with_capacity(payload.len() + self.config.default_length() * 4);
        for segment in scanner {
            match segment {
                Segment::Literal(bytes) => out.extend_from_slice(bytes),
                Segment::Tag(raw) => self.substitute(raw, &mut out)?,
            }
        }
        Ok(Cow::Owned(out))
    }

    /// [`randomize`](Self::randomize) for text. Generated bytes that are not
    /// valid UTF-8 (`BYTES`) are replaced with `U+FFFD`.
    pub fn randomize_str(&self, payload: &str) -> Result<String, GeneratorError> {
        let out = self.randomize(payload.as_bytes())?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn substitute(&self, raw: &[u8], out: &mut Vec<u8>) -> Result<(), GeneratorError> {
        let canonical = normalize(raw, self.config.input_encoding());
        let body = canonical
            .strip_prefix(TAG_OPEN)
            .and_then(|rest| rest.strip_suffix(TAG_CLOSE));
        let Some(body) = body else {
            out.extend_from_slice(raw);
            return Ok(());
        };

        let (action, length) = match parse_tag(body, &self.config) {
            ParsedTag::Malformed => {
                debug!(tag = %String::from_utf8_lossy(raw), "Malformed tag left as-is");
                out.extend_from_slice(raw);
                return Ok(());
            }
            ParsedTag::Bare => (keywords::Action::Default, None),
            ParsedTag::Spec(spec) => {
                let length = spec.length.resolve(self.source.as_ref())?;
                let keyword = spec.keyword.resolve(self.source.as_ref())?;
                (keywords::resolve(&self.config, keyword), length)
            }
        };

        let encoding = self.config.output_encoding();
        if encoding == OutputEncoding::None {
            return keywords::generate(&action, length, &self.config, self.source.as_ref(), out);
        }
        let mut generated = Vec::new();
        keywords::generate(&action, length, &self.config, self.source.as_ref(), &mut generated)?;
        encoding.write(&generated, out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputEncoding;
    use randtag_generator::SeededSource;

    fn seeded() -> Engine {
        Engine::builder().with_source(SeededSource::new(42)).build()
    }

    #[test]
    fn test_passthrough_borrows() {
        let engine = Engine::new();
        let out = engine.randomize(b"no tags %7B here").unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_bare_tag_default_length() {
        let engine = seeded();
        let out = engine.randomize(b"<{RAND}>").unwrap();
        assert_eq!(out.len(), 2 + 16);
        assert!(out.starts_with(b"<") && out.ends_with(b">"));
    }

    #[test]
    fn test_random_suffix() {
        let engine = seeded();
        let out = engine.randomize(b"{RANDOM;4;DIGIT}").unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(u8::is_ascii_digit));
    }

    #[test]
    fn test_malformed_tag_verbatim() {
        let engine = seeded();
        assert_eq!(engine.randomize(b"a{RANDfoo}b").unwrap().as_ref(), b"a{RANDfoo}b");
        assert_eq!(
            engine.randomize(b"%7BRANDOMx%7D").unwrap().as_ref(),
            b"%7BRANDOMx%7D"
        );
    }

    #[test]
    fn test_unterminated_tag_literal() {
        let engine = seeded();
        let input = b"x {RAND;4} y {RAND;5;ABL";
        let out = engine.randomize(input).unwrap();
        assert!(out.ends_with(b" y {RAND;5;ABL"));
        assert_eq!(out.len(), input.len() - "{RAND;4}".len() + 4);
    }

    #[test]
    fn test_output_encoding_applies_to_substitution_only() {
        let engine = Engine::builder()
            .with_output_encoding(OutputEncoding::Url)
            .with_custom_keyword("PAIR", |_| b"a b".to_vec())
            .build();
        let out = engine.randomize(b"q=1 & {RAND;PAIR}").unwrap();
        assert_eq!(out.as_ref(), b"q=1 & a%20b");
    }

    #[test]
    fn test_input_dialect_disabled() {
        let engine = Engine::builder()
            .with_input_encoding(InputEncoding::empty())
            .build();
        let input = b"%7BRAND%3B8%3BHEX%7D";
        assert_eq!(engine.randomize(input).unwrap().as_ref(), input);
    }

    #[test]
    fn test_reset() {
        let mut engine = Engine::builder()
            .with_default_length(4)
            .with_disabled_keywords(["HEX"])
            .with_custom_charset("VOWEL", "aeiou")
            .build();
        engine.reset();

        assert_eq!(engine.config().default_length(), 16);
        assert!(engine.config().is_keyword_enabled("HEX"));
        assert!(engine.config().custom_charset("VOWEL").is_none());
    }

    #[test]
    fn test_seeded_engines_agree() {
        let input = b"{RAND;8;HEX}-{RAND;3-9;ABR}-{RAND;UUID}";
        let a = seeded().randomize(input).unwrap().into_owned();
        let b = seeded().randomize(input).unwrap().into_owned();
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomize_str() {
        let engine = seeded();
        let out = engine.randomize_str("id={RAND;6;ABU}").unwrap();
        assert!(out.starts_with("id="));
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn test_randomize_str_replaces_invalid_utf8() {
        let engine = Engine::builder()
            .with_custom_keyword("RAW", |_| vec![0xff, b'a'])
            .build();

        let bytes = engine.randomize(b"x{RAND;RAW}").unwrap();
        assert_eq!(bytes.as_ref(), b"x\xffa");

        let text = engine.randomize_str("x{RAND;RAW}").unwrap();
        assert_eq!(text, "x\u{FFFD}a");
        assert_ne!(text.len(), bytes.len());
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
