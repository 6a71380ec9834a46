//! The mnemonic value type and the inputs validation accepts.

use std::fmt;

use wordseed_types::Result;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec::Codec;

// ---------------------------------------------------------------------------
// Mnemonic
// ---------------------------------------------------------------------------

/// A mnemonic sentence: words joined by single ASCII spaces.
///
/// The inner string is zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub(crate) fn from_words(words: &[&str]) -> Self {
        Self(words.join(" "))
    }

    /// Normalizes whitespace in `phrase` and checks it strictly against
    /// `codec`, including the embedded checksum.
    pub fn parse(codec: &Codec, phrase: &str) -> Result<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        codec.validate(&words)?;
        Ok(Self::from_words(&words))
    }

    /// Returns the mnemonic sentence.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the individual words.
    pub fn words(&self) -> Vec<&str> {
        self.0.split(' ').collect()
    }

    pub fn word_count(&self) -> usize {
        self.0.split(' ').count()
    }

    /// Moves the sentence out. The caller becomes responsible for
    /// wiping it.
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Phrase
// ---------------------------------------------------------------------------

/// Anything validation can read as a word sequence: a whitespace
/// separated sentence or an already split list of words.
pub trait Phrase {
    fn words(&self) -> Vec<&str>;
}

impl Phrase for str {
    fn words(&self) -> Vec<&str> {
        self.split_whitespace().collect()
    }
}

impl Phrase for String {
    fn words(&self) -> Vec<&str> {
        self.as_str().words()
    }
}

impl Phrase for Mnemonic {
    fn words(&self) -> Vec<&str> {
        Mnemonic::words(self)
    }
}

impl<S: AsRef<str>> Phrase for [S] {
    fn words(&self) -> Vec<&str> {
        self.iter().map(AsRef::<str>::as_ref).collect()
    }
}

impl<S: AsRef<str>> Phrase for Vec<S> {
    fn words(&self) -> Vec<&str> {
        self.as_slice().words()
    }
}

impl<S: AsRef<str>, const N: usize> Phrase for [S; N] {
    fn words(&self) -> Vec<&str> {
        self.as_slice().words()
    }
}

impl<P: Phrase + ?Sized> Phrase for &P {
    fn words(&self) -> Vec<&str> {
        (**self).words()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
