//! Codec configuration with sensible defaults.
//!
//! A [`CodecConfig`] can be built in code, or loaded from a JSON file in
//! which every field is optional:
//!
//! ```json
//! {
//!   "default_word_count": 12,
//!   "allow_extended_word_counts": false,
//!   "wordlist_path": "/etc/wordseed/english.txt"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, WordseedError};

/// Largest word count any BIP-39 table defines.
const MAX_WORD_COUNT: usize = 24;

/// Runtime configuration for a codec instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Word count used by `generate_default`.
    pub default_word_count: usize,

    /// Whether the short 3- and 6-word sizes are accepted by `generate`
    /// and `from_entropy`.
    ///
    /// Validation without an explicit count only ever accepts the
    /// standard sizes regardless of this flag.
    pub allow_extended_word_counts: bool,

    /// Newline-delimited wordlist file. `None` selects the embedded
    /// English list.
    pub wordlist_path: Option<PathBuf>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_word_count: 24,
            allow_extended_word_counts: true,
            wordlist_path: None,
        }
    }
}

impl CodecConfig {
    /// Validates the values that can be checked without the word-count
    /// table. Membership of `default_word_count` in the active table is
    /// checked when the codec is built.
    pub fn validate(&self) -> Result<()> {
        if self.default_word_count == 0 || self.default_word_count > MAX_WORD_COUNT {
            return Err(WordseedError::ConfigError {
                reason: format!(
                    "default_word_count must be 1..={MAX_WORD_COUNT}, got {}",
                    self.default_word_count
                ),
            });
        }

        if let Some(path) = &self.wordlist_path {
            if path.as_os_str().is_empty() {
                return Err(WordseedError::ConfigError {
                    reason: "wordlist_path must not be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// Loads and validates a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| WordseedError::ConfigError {
            reason: format!("failed to read config file {}: {e}", path.display()),
        })?;

        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "codec config loaded");
        Ok(config)
    }

    /// Parses and validates a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| WordseedError::ConfigError {
            reason: format!("invalid config JSON: {e}"),
        })?;

        if let Err(e) = config.validate() {
            tracing::warn!("rejecting codec config: {e}");
            return Err(e);
        }

        Ok(config)
    }
}
