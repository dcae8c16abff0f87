//! Engine settings loaded from YAML.
//!
//! ```yaml
//! default_length: 12
//! max_length: 64
//! input_encodings: [url]
//! output_encoding: html
//! keyword_choices: false
//! disabled_keywords: [bytes, null]
//! mail_providers: [example.org]
//! charsets:
//!   vowel: aeiou
//! ```
//!
//! Every field is optional; unset fields keep the engine defaults when the
//! settings are applied with [`EngineBuilder::with_settings`](crate::EngineBuilder::with_settings).

use crate::encoding::{Dialect, OutputEncoding};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Error reading settings file
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A length setting is zero
    #[error("Setting '{0}' must be greater than zero")]
    ZeroLength(&'static str),

    /// min_length is greater than max_length
    #[error("min_length ({min}) is greater than max_length ({max})")]
    InvalidBounds { min: usize, max: usize },

    /// A custom charset has no characters
    #[error("Charset for keyword '{0}' is empty")]
    EmptyCharset(String),
}

/// Serializable engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Length used when a tag declares none
    pub default_length: Option<usize>,

    /// Smallest accepted declared length
    pub min_length: Option<usize>,

    /// Largest accepted declared length
    pub max_length: Option<usize>,

    /// Encoded dialects accepted on input (raw is always accepted)
    pub input_encodings: Option<Vec<Dialect>>,

    /// Encoding applied to generated substitutions
    pub output_encoding: Option<OutputEncoding>,

    /// Honor `N-M` length ranges
    pub ranges: Option<bool>,

    /// Honor `A,B` keyword choices
    pub keyword_choices: Option<bool>,

    /// Honor `N,M` length choices
    pub length_choices: Option<bool>,

    /// Keywords falling back to the default charset
    pub disabled_keywords: Vec<String>,

    /// Domains used by `EMAIL`
    pub mail_providers: Vec<String>,

    /// Custom charset keywords
    pub charsets: BTreeMap<String, String>,
}

impl EngineSettings {
    /// Parse and validate settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings = Self::from_yaml(&content)?;
        debug!("Loaded engine settings from {path:?}");
        Ok(settings)
    }

    /// Check lengths and charsets.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [
            ("default_length", self.default_length),
            ("min_length", self.min_length),
            ("max_length", self.max_length),
        ] {
            if value == Some(0) {
                return Err(SettingsError::ZeroLength(name));
            }
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(SettingsError::InvalidBounds { min, max });
            }
        }

        if let Some((keyword, _)) = self.charsets.iter().find(|(_, chars)| chars.is_empty()) {
            return Err(SettingsError::EmptyCharset(keyword.clone()));
        }

        Ok(())
    }
}
