//! Engine configuration and builder.
//!
//! Configuration is assembled once through [`EngineBuilder`] and is read-only
//! afterwards. Every `with_*` method consumes and returns the builder, so
//! options compose as a chain:
//!
//! ```rust
//! use randtag::{Engine, InputEncoding};
//!
//! let engine = Engine::builder()
//!     .with_default_length(8)
//!     .with_input_encoding(InputEncoding::URL)
//!     .with_disabled_keywords(["bytes", "null"])
//!     .with_custom_charset("vowel", "aeiou")
//!     .build();
//!
//! assert_eq!(engine.config().default_length(), 8);
//! ```

use crate::encoding::{InputEncoding, OutputEncoding};
use crate::engine::Engine;
use crate::keywords::Keyword;
use crate::settings::EngineSettings;
use randtag_generator::{safe_mail_providers, FastSource, RandomSource};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::debug;

/// Default placeholder length when a tag declares none.
pub const DEFAULT_LENGTH: usize = 16;
/// Smallest declared length accepted by default.
pub const DEFAULT_MIN_LENGTH: usize = 1;
/// Largest declared length accepted by default.
pub const DEFAULT_MAX_LENGTH: usize = 99;

/// Generator registered for a custom keyword. Receives the resolved length.
pub type CustomKeywordGenerator = Arc<dyn Fn(usize) -> Vec<u8> + Send + Sync>;

/// Settings that drive a substitution pass.
#[derive(Clone)]
pub struct EngineConfig {
    default_length: usize,
    min_length: usize,
    max_length: usize,
    input_encoding: InputEncoding,
    output_encoding: OutputEncoding,
    ranges_enabled: bool,
    keyword_choices_enabled: bool,
    length_choices_enabled: bool,
    /// Uppercase keyword -> enabled. Names missing from the map are enabled.
    enabled_keywords: HashMap<String, bool>,
    pub(crate) mail_providers: Vec<String>,
    custom_charsets: HashMap<String, Vec<u8>>,
    custom_keywords: HashMap<String, CustomKeywordGenerator>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            input_encoding: InputEncoding::default(),
            output_encoding: OutputEncoding::default(),
            ranges_enabled: true,
            keyword_choices_enabled: true,
            length_choices_enabled: true,
            enabled_keywords: Keyword::iter()
                .map(|kw| (kw.as_str().to_string(), true))
                .collect(),
            mail_providers: safe_mail_providers(),
            custom_charsets: HashMap::new(),
            custom_keywords: HashMap::new(),
        }
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom_keywords: Vec<&str> =
            self.custom_keywords.keys().map(String::as_str).collect();
        custom_keywords.sort_unstable();

        f.debug_struct("EngineConfig")
            .field("default_length", &self.default_length)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("input_encoding", &self.input_encoding)
            .field("output_encoding", &self.output_encoding)
            .field("ranges_enabled", &self.ranges_enabled)
            .field("keyword_choices_enabled", &self.keyword_choices_enabled)
            .field("length_choices_enabled", &self.length_choices_enabled)
            .field("enabled_keywords", &self.enabled_keywords)
            .field("mail_providers", &self.mail_providers)
            .field("custom_charsets", &self.custom_charsets)
            .field("custom_keywords", &custom_keywords)
            .finish()
    }
}

impl EngineConfig {
    pub fn default_length(&self) -> usize {
        self.default_length
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn input_encoding(&self) -> InputEncoding {
        self.input_encoding
    }

    pub fn output_encoding(&self) -> OutputEncoding {
        self.output_encoding
    }

    pub fn ranges_enabled(&self) -> bool {
        self.ranges_enabled
    }

    pub fn keyword_choices_enabled(&self) -> bool {
        self.keyword_choices_enabled
    }

    pub fn length_choices_enabled(&self) -> bool {
        self.length_choices_enabled
    }

    pub fn mail_providers(&self) -> &[String] {
        &self.mail_providers
    }

    /// Whether `keyword` (any case) is enabled. Unknown names count as enabled.
    pub fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.enabled_keywords
            .get(&keyword.to_ascii_uppercase())
            .copied()
            .unwrap_or(true)
    }

    /// Charset registered for `keyword` (any case).
    pub fn custom_charset(&self, keyword: &str) -> Option<&[u8]> {
        self.custom_charsets
            .get(&keyword.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    /// Generator registered for `keyword` (any case).
    pub fn custom_keyword(&self, keyword: &str) -> Option<&CustomKeywordGenerator> {
        self.custom_keywords.get(&keyword.to_ascii_uppercase())
    }
}

/// Builder for [`Engine`].
///
/// Invalid values (zero lengths, empty provider lists, empty charsets) are
/// ignored and the previous value is kept.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    config: EngineConfig,
    source: Arc<dyn RandomSource>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            source: Arc::new(FastSource),
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length used when a tag declares none or an invalid one.
    pub fn with_default_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.config.default_length = length;
        }
        self
    }

    /// Smallest accepted declared length.
    pub fn with_min_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.config.min_length = length;
        }
        self
    }

    /// Largest accepted declared length. Declarations stay limited to two digits.
    pub fn with_max_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.config.max_length = length;
        }
        self
    }

    pub fn with_input_encoding(mut self, encoding: InputEncoding) -> Self {
        self.config.input_encoding = encoding;
        self
    }

    pub fn with_output_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.config.output_encoding = encoding;
        self
    }

    /// Honor `N-M` length ranges.
    pub fn with_ranges(mut self, enabled: bool) -> Self {
        self.config.ranges_enabled = enabled;
        self
    }

    /// Honor `A,B` keyword choices.
    pub fn with_keyword_choices(mut self, enabled: bool) -> Self {
        self.config.keyword_choices_enabled = enabled;
        self
    }

    /// Honor `N,M` length choices.
    pub fn with_length_choices(mut self, enabled: bool) -> Self {
        self.config.length_choices_enabled = enabled;
        self
    }

    /// Disable keywords by name (any case). Disabled keywords fall back to the
    /// default charset.
    pub fn with_disabled_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.config
                .enabled_keywords
                .insert(keyword.as_ref().to_ascii_uppercase(), false);
        }
        self
    }

    /// Re-enable keywords previously disabled.
    pub fn with_enabled_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.config
                .enabled_keywords
                .insert(keyword.as_ref().to_ascii_uppercase(), true);
        }
        self
    }

    /// Replace the mail-provider list used by `EMAIL`.
    pub fn with_mail_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let providers: Vec<String> = providers.into_iter().map(Into::into).collect();
        if !providers.is_empty() {
            self.config.mail_providers = providers;
        }
        self
    }

    /// Register a keyword that draws characters from `charset`.
    pub fn with_custom_charset(mut self, keyword: &str, charset: impl Into<Vec<u8>>) -> Self {
        let charset = charset.into();
        if !charset.is_empty() {
            self.config
                .custom_charsets
                .insert(keyword.to_ascii_uppercase(), charset);
        }
        self
    }

    /// Register a keyword backed by an arbitrary generator.
    pub fn with_custom_keyword<F>(mut self, keyword: &str, generator: F) -> Self
    where
        F: Fn(usize) -> Vec<u8> + Send + Sync + 'static,
    {
        self.config
            .custom_keywords
            .insert(keyword.to_ascii_uppercase(), Arc::new(generator));
        self
    }

    /// Random source used by every generator.
    pub fn with_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Apply settings loaded from a file. Unset fields keep their current value.
    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        if let Some(length) = settings.default_length {
            self = self.with_default_length(length);
        }
        if let Some(length) = settings.min_length {
            self = self.with_min_length(length);
        }
        if let Some(length) = settings.max_length {
            self = self.with_max_length(length);
        }
        if let Some(dialects) = settings.input_encodings {
            self = self.with_input_encoding(dialects.into_iter().map(InputEncoding::from).collect());
        }
        if let Some(encoding) = settings.output_encoding {
            self = self.with_output_encoding(encoding);
        }
        if let Some(enabled) = settings.ranges {
            self = self.with_ranges(enabled);
        }
        if let Some(enabled) = settings.keyword_choices {
            self = self.with_keyword_choices(enabled);
        }
        if let Some(enabled) = settings.length_choices {
            self = self.with_length_choices(enabled);
        }
        self = self
            .with_disabled_keywords(settings.disabled_keywords)
            .with_mail_providers(settings.mail_providers);
        for (keyword, charset) in settings.charsets {
            self = self.with_custom_charset(&keyword, charset);
        }
        self
    }

    pub fn build(self) -> Engine {
        debug!(
            default_length = self.config.default_length,
            min_length = self.config.min_length,
            max_length = self.config.max_length,
            custom_charsets = self.config.custom_charsets.len(),
            custom_keywords = self.config.custom_keywords.len(),
            "Building randomizer engine"
        );
        Engine::from_parts(self.config, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.default_length(), 16);
        assert_eq!(config.min_length(), 1);
        assert_eq!(config.max_length(), 99);
        assert_eq!(config.input_encoding(), InputEncoding::URL | InputEncoding::HTML);
        assert_eq!(config.output_encoding(), OutputEncoding::None);
        assert!(config.ranges_enabled());
        assert!(config.keyword_choices_enabled());
        assert!(config.length_choices_enabled());
        assert!(!config.mail_providers().is_empty());
        for keyword in Keyword::iter() {
            assert!(config.is_keyword_enabled(keyword.as_str()));
        }
    }

    #[test]
    fn test_zero_lengths_ignored() {
        let engine = EngineBuilder::new()
            .with_default_length(0)
            .with_min_length(0)
            .with_max_length(0)
            .build();

        assert_eq!(engine.config().default_length(), DEFAULT_LENGTH);
        assert_eq!(engine.config().min_length(), DEFAULT_MIN_LENGTH);
        assert_eq!(engine.config().max_length(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let engine = EngineBuilder::new()
            .with_disabled_keywords(["hex", "Uuid"])
            .with_custom_charset("vowel", "aeiou")
            .with_custom_keyword("Answer", |_| b"42".to_vec())
            .build();
        let config = engine.config();

        assert!(!config.is_keyword_enabled("HEX"));
        assert!(!config.is_keyword_enabled("uuid"));
        assert!(config.is_keyword_enabled("DIGIT"));
        assert_eq!(config.custom_charset("VOWEL"), Some(b"aeiou".as_slice()));
        assert_eq!(config.custom_keyword("answer").map(|g| g(3)), Some(b"42".to_vec()));
    }

    #[test]
    fn test_reenable_keyword() {
        let engine = EngineBuilder::new()
            .with_disabled_keywords(["HEX"])
            .with_enabled_keywords(["hex"])
            .build();
        assert!(engine.config().is_keyword_enabled("HEX"));
    }

    #[test]
    fn test_empty_providers_and_charsets_ignored() {
        let engine = EngineBuilder::new()
            .with_mail_providers(Vec::<String>::new())
            .with_custom_charset("EMPTY", Vec::<u8>::new())
            .build();

        assert_eq!(engine.config().mail_providers(), safe_mail_providers().as_slice());
        assert!(engine.config().custom_charset("EMPTY").is_none());
    }

    #[test]
    fn test_debug_lists_custom_keyword_names() {
        let engine = EngineBuilder::new()
            .with_custom_keyword("zeta", |n| vec![b'z'; n])
            .build();
        let debug = format!("{:?}", engine.config());
        assert!(debug.contains("ZETA"));
    }
}
