//! Keyword table and dispatch.
//!
//! A resolved keyword selects the generator that produces a substitution.
//! Resolution order: disabled names, built-in keywords, custom keywords,
//! custom charsets. Anything unmatched uses the full default charset.

use crate::config::{CustomKeywordGenerator, EngineConfig};
use randtag_generator::generators::{bytes, choice, network, string, uuid};
use randtag_generator::{charsets, GeneratorError, RandomSource};
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, trace};

/// Local-part length for `EMAIL` when the tag declares no valid length.
const EMAIL_LOCAL_LENGTH: usize = 8;
/// Provider used when the configured list is empty.
const FALLBACK_MAIL_PROVIDER: &str = "gmail.com";

/// Built-in keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Keyword {
    /// Lowercase letters.
    Abl,
    /// Uppercase letters.
    Abu,
    /// Mixed-case letters.
    Abr,
    /// Decimal digits.
    Digit,
    /// Random bytes rendered as lowercase hex, two characters per byte.
    Hex,
    /// Version 4 UUID, hyphenated.
    Uuid,
    /// IPv4 address.
    Ipv4,
    /// IPv6 address.
    Ipv6,
    /// `local@provider` address.
    Email,
    /// Raw random bytes.
    Bytes,
    /// Spaces.
    Space,
    /// Control bytes `0..=15`.
    Null,
}

impl Keyword {
    /// Canonical uppercase name.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// What a keyword resolved to.
#[derive(Clone)]
pub(crate) enum Action<'c> {
    Default,
    Builtin(Keyword),
    Custom(&'c CustomKeywordGenerator),
    Charset(&'c [u8]),
}

/// Resolve the keyword as written in a tag.
pub(crate) fn resolve<'c>(config: &'c EngineConfig, keyword: Option<&[u8]>) -> Action<'c> {
    let Some(raw) = keyword else {
        return Action::Default;
    };
    let name = String::from_utf8_lossy(raw).to_ascii_uppercase();

    if !config.is_keyword_enabled(&name) {
        debug!(keyword = %name, "Keyword disabled, using default charset");
        return Action::Default;
    }
    if let Ok(builtin) = name.parse::<Keyword>() {
        return Action::Builtin(builtin);
    }
    if let Some(generator) = config.custom_keyword(&name) {
        return Action::Custom(generator);
    }
    if let Some(charset) = config.custom_charset(&name) {
        return Action::Charset(charset);
    }

    trace!(keyword = %name, "Unknown keyword, using default charset");
    Action::Default
}

/// Produce the substitution for `action` and append it to `out`.
///
/// `length` is the declared length, `None` when the tag declared no valid one.
pub(crate) fn generate(
    action: &Action<'_>,
    length: Option<usize>,
    config: &EngineConfig,
    source: &dyn RandomSource,
    out: &mut Vec<u8>,
) -> Result<(), GeneratorError> {
    let n = length.unwrap_or(config.default_length());

    match action {
        Action::Default => string::from_charset(source, n, charsets::ALL, out),
        Action::Charset(charset) => string::from_charset(source, n, charset, out),
        Action::Custom(generator) => {
            out.extend_from_slice(&generator(n));
            Ok(())
        }
        Action::Builtin(keyword) => match keyword {
            Keyword::Abl => string::from_charset(source, n, charsets::ALPHABET_LOWER, out),
            Keyword::Abu => string::from_charset(source, n, charsets::ALPHABET_UPPER, out),
            Keyword::Abr => string::from_charset(source, n, charsets::ALPHABET, out),
            Keyword::Digit => string::from_charset(source, n, charsets::DIGITS, out),
            Keyword::Null => string::from_charset(source, n, charsets::NULL, out),
            Keyword::Space => {
                string::repeat(n, b' ', out);
                Ok(())
            }
            Keyword::Hex => {
                out.extend_from_slice(bytes::random_hex(source, n)?.as_bytes());
                Ok(())
            }
            Keyword::Bytes => {
                out.extend_from_slice(&bytes::random_bytes(source, n)?);
                Ok(())
            }
            Keyword::Uuid => {
                let uuid = uuid::uuid_v4(source)?;
                out.extend_from_slice(uuid.hyphenated().to_string().as_bytes());
                Ok(())
            }
            Keyword::Ipv4 => {
                out.extend_from_slice(network::ipv4(source)?.to_string().as_bytes());
                Ok(())
            }
            Keyword::Ipv6 => {
                out.extend_from_slice(network::ipv6(source)?.to_string().as_bytes());
                Ok(())
            }
            Keyword::Email => {
                let local = length.unwrap_or(EMAIL_LOCAL_LENGTH);
                string::from_charset(source, local, charsets::ALPHABET_LOWER, out)?;
                let provider = choice::choose(source, config.mail_providers())?
                    .map_or(FALLBACK_MAIL_PROVIDER, String::as_str);
                out.push(b'@');
                out.extend_from_slice(provider.as_bytes());
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Engine;
    use randtag_generator::SeededSource;
    use strum::IntoEnumIterator;

    fn run(config: &EngineConfig, keyword: &[u8], length: Option<usize>) -> Vec<u8> {
        let source = SeededSource::new(42);
        let mut out = Vec::new();
        generate(&resolve(config, Some(keyword)), length, config, &source, &mut out).unwrap();
        out
    }

    #[test]
    fn test_keyword_names() {
        let names: Vec<&str> = Keyword::iter().map(Keyword::as_str).collect();
        assert_eq!(
            names,
            vec![
                "ABL", "ABU", "ABR", "DIGIT", "HEX", "UUID", "IPV4", "IPV6", "EMAIL", "BYTES",
                "SPACE", "NULL"
            ]
        );
        assert_eq!("ipv6".parse::<Keyword>().unwrap(), Keyword::Ipv6);
    }

    #[test]
    fn test_resolve_order() {
        let engine = Engine::builder()
            .with_disabled_keywords(["DIGIT"])
            .with_custom_keyword("HEX", |_| b"custom".to_vec())
            .with_custom_keyword("ANSWER", |_| b"42".to_vec())
            .with_custom_charset("ANSWER", "x")
            .with_custom_charset("VOWEL", "aeiou")
            .build();
        let config = engine.config();

        assert!(matches!(resolve(config, None), Action::Default));
        assert!(matches!(resolve(config, Some(b"digit")), Action::Default));
        assert!(matches!(
            resolve(config, Some(b"hex")),
            Action::Builtin(Keyword::Hex)
        ));
        assert!(matches!(resolve(config, Some(b"answer")), Action::Custom(_)));
        assert!(matches!(resolve(config, Some(b"Vowel")), Action::Charset(b"aeiou")));
        assert!(matches!(resolve(config, Some(b"nope")), Action::Default));
        assert!(matches!(resolve(config, Some(&[0xff, 0xfe])), Action::Default));
    }

    #[test]
    fn test_charset_keywords() {
        let config = EngineConfig::default();

        assert!(run(&config, b"ABL", Some(12)).iter().all(u8::is_ascii_lowercase));
        assert!(run(&config, b"ABU", Some(12)).iter().all(u8::is_ascii_uppercase));
        assert!(run(&config, b"ABR", Some(12)).iter().all(u8::is_ascii_alphabetic));
        assert!(run(&config, b"DIGIT", Some(12)).iter().all(u8::is_ascii_digit));
        assert!(run(&config, b"NULL", Some(12)).iter().all(|&b| b <= 15));
        assert_eq!(run(&config, b"SPACE", Some(3)), b"   ");
        assert_eq!(run(&config, b"ABL", None).len(), config.default_length());
    }

    #[test]
    fn test_hex_and_bytes_lengths() {
        let config = EngineConfig::default();

        let hex = run(&config, b"HEX", Some(8));
        assert_eq!(hex.len(), 16);
        assert!(hex.iter().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b)));
        assert_eq!(run(&config, b"BYTES", Some(5)).len(), 5);
    }

    #[test]
    fn test_length_ignored_for_fixed_shapes() {
        let config = EngineConfig::default();

        assert_eq!(run(&config, b"UUID", Some(3)).len(), 36);
        let ip = String::from_utf8(run(&config, b"IPV4", Some(3))).unwrap();
        assert!(ip.parse::<std::net::Ipv4Addr>().is_ok());
        let ip = String::from_utf8(run(&config, b"IPV6", None)).unwrap();
        assert!(ip.parse::<std::net::Ipv6Addr>().is_ok());
    }

    #[test]
    fn test_email_local_part_fallback() {
        let engine = Engine::builder().with_mail_providers(["example.org"]).build();

        let email = run(engine.config(), b"EMAIL", None);
        assert_eq!(email.len(), EMAIL_LOCAL_LENGTH + "@example.org".len());
        assert!(email.ends_with(b"@example.org"));

        let email = run(engine.config(), b"EMAIL", Some(3));
        assert_eq!(email.len(), 3 + "@example.org".len());
    }

    #[test]
    fn test_email_empty_provider_list() {
        let mut config = EngineConfig::default();
        config.mail_providers.clear();
        let source = SeededSource::new(42);
        let mut out = Vec::new();

        generate(
            &Action::Builtin(Keyword::Email),
            Some(5),
            &config,
            &source,
            &mut out,
        )
        .unwrap();

        assert_eq!(out.len(), 5 + "@gmail.com".len());
        assert!(out.ends_with(b"@gmail.com"));
        assert!(out[..5].iter().all(u8::is_ascii_lowercase));
    }

    #[test]
    fn test_custom_generators() {
        let engine = Engine::builder()
            .with_custom_keyword("STARS", |n| vec![b'*'; n])
            .with_custom_charset("BIN", "01")
            .build();

        assert_eq!(run(engine.config(), b"stars", Some(4)), b"****");
        let bin = run(engine.config(), b"BIN", Some(20));
        assert_eq!(bin.len(), 20);
        assert!(bin.iter().all(|&b| b == b'0' || b == b'1'));
    }
}
