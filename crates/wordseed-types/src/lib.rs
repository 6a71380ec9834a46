//! Core shared types for the wordseed BIP-39 codec.
//!
//! Holds the error surface and codec configuration so that the codec
//! crate and any embedding application agree on a single vocabulary.

pub mod config;

use thiserror::Error;

// ---------------------------------------------------------------------------
// WordseedError
// ---------------------------------------------------------------------------

/// Central error type for wordseed.
///
/// Every failure is caused by caller input or a malformed resource,
/// never by a transient condition, so none of these are worth retrying
/// with the same arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordseedError {
    /// The requested word count is not in the supported table.
    #[error("invalid word count {requested}: supported counts are {supported:?}")]
    InvalidWordCount {
        /// The word count the caller asked for.
        requested: usize,
        /// Word counts the active table accepts, ascending.
        supported: Vec<usize>,
    },

    /// The entropy length does not match any supported bit length.
    #[error("invalid entropy length of {got_bits} bits: supported sizes are {supported:?}")]
    InvalidEntropyLength {
        /// Length of the supplied entropy in bits.
        got_bits: usize,
        /// Entropy bit lengths the active table accepts, ascending.
        supported: Vec<usize>,
    },

    /// A mnemonic word is not present in the wordlist.
    #[error("word '{word}' not in wordlist")]
    UnknownWord {
        /// The offending word.
        word: String,
    },

    /// The checksum bits embedded in a mnemonic do not match its entropy.
    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    /// The wordlist resource is malformed.
    #[error("wordlist error: {reason}")]
    WordlistError {
        /// Human-readable description of the problem.
        reason: String,
    },

    /// A configuration value is invalid or the config file is unreadable.
    #[error("config error: {reason}")]
    ConfigError {
        /// Human-readable description of the configuration problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Result alias
// ---------------------------------------------------------------------------

/// Convenience result type using [`WordseedError`].
pub type Result<T> = std::result::Result<T, WordseedError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_word_count_reports_request_and_supported() {
        let err = WordseedError::InvalidWordCount {
            requested: 13,
            supported: vec![12, 15, 18, 21, 24],
        };
        let msg = err.to_string();
        assert!(msg.contains("13"));
        assert!(msg.contains("[12, 15, 18, 21, 24]"));
    }

    #[test]
    fn invalid_entropy_length_display() {
        let err = WordseedError::InvalidEntropyLength {
            got_bits: 8,
            supported: vec![128, 256],
        };
        assert_eq!(
            err.to_string(),
            "invalid entropy length of 8 bits: supported sizes are [128, 256]"
        );
    }

    #[test]
    fn unknown_word_display() {
        let err = WordseedError::UnknownWord {
            word: "notaword".into(),
        };
        assert!(err.to_string().contains("notaword"));
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(WordseedError::ChecksumMismatch, WordseedError::ChecksumMismatch);
        assert_ne!(
            WordseedError::ChecksumMismatch,
            WordseedError::ConfigError {
                reason: "x".into()
            }
        );
    }
}
