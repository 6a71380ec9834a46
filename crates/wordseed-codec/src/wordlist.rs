//! The 2048-word list used for 11-bit index lookups.
//!
//! The English BIP-39 list is embedded at compile time and parsed once on
//! first access. Other sources (a file path or in-memory text) go through
//! the same parser so every [`Wordlist`] upholds the same invariants:
//! exactly [`WORDLIST_LEN`] distinct, non-empty, trimmed entries.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use wordseed_types::{Result, WordseedError};

/// Number of entries in a BIP-39 wordlist (2^11).
pub const WORDLIST_LEN: usize = 2048;

const ENGLISH_RAW: &str = include_str!("../wordlists/english.txt");

static ENGLISH: OnceLock<Arc<Wordlist>> = OnceLock::new();

/// An immutable, indexed wordlist with a reverse lookup table.
#[derive(Debug)]
pub struct Wordlist {
    words: Box<[String]>,
    index: HashMap<String, u16>,
    sorted: bool,
}

impl Wordlist {
    /// Returns the embedded English BIP-39 wordlist.
    ///
    /// # Panics
    ///
    /// Panics if the embedded resource is malformed, which is a build
    /// defect rather than a runtime condition.
    pub fn english() -> Arc<Wordlist> {
        ENGLISH
            .get_or_init(|| match Self::from_text(ENGLISH_RAW) {
                Ok(list) => Arc::new(list),
                Err(e) => panic!("embedded English wordlist is invalid: {e}"),
            })
            .clone()
    }

    /// Parses a newline-delimited wordlist.
    ///
    /// Each line is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`WordseedError::WordlistError`] if the list does not hold exactly
    /// 2048 entries, or an entry is duplicated or contains whitespace.
    pub fn from_text(text: &str) -> Result<Self> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        Self::from_words(words)
    }

    /// Reads and parses a wordlist file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| WordseedError::WordlistError {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;

        let list = Self::from_text(&text)?;
        tracing::info!(path = %path.display(), "wordlist loaded");
        Ok(list)
    }

    /// Builds a wordlist from already separated entries.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.len() != WORDLIST_LEN {
            return Err(WordseedError::WordlistError {
                reason: format!(
                    "expected {WORDLIST_LEN} words, got {}",
                    words.len()
                ),
            });
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(WordseedError::WordlistError {
                    reason: format!("entry {i} is empty or contains whitespace"),
                });
            }
            // i < 2048, fits in u16.
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(WordseedError::WordlistError {
                    reason: format!("duplicate word '{word}' at index {i}"),
                });
            }
        }

        let sorted = words.windows(2).all(|pair| pair[0] < pair[1]);

        Ok(Self {
            words: words.into_boxed_slice(),
            index,
            sorted,
        })
    }

    /// All entries in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word at `index`, or `None` when `index >= 2048`.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Index of `word`, or `None` if it is not in the list.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Entries that start with `prefix`, in list order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        if !self.sorted {
            return self
                .words
                .iter()
                .filter(|w| w.starts_with(prefix))
                .map(String::as_str)
                .collect();
        }

        let start = self.words.partition_point(|w| w.as_str() < prefix);
        self.words[start..]
            .iter()
            .take_while(|w| w.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
