//! BIP-39 mnemonic generation and validation.
//!
//! Converts entropy into a sentence of words from the fixed 2048-word
//! English list and checks sentences against that list.
//!
//! # Modules
//!
//! - [`codec`]: [`Codec`] generation, encoding, validation, accessors
//! - [`wordlist`]: the embedded wordlist and its loaders
//! - [`word_count`]: supported sizes and their entropy lengths
//! - [`mnemonic`]: the zeroizing [`Mnemonic`] type and [`Phrase`] inputs
//! - [`bits`]: MSB-first bit cursor used for 11-bit packing
//! - [`hash`]: SHA-256 and checksum extraction
//!
//! The free functions below run against a process-wide codec over the
//! English list (see [`codec::default_codec`]).
//!
//! ```
//! let mnemonic = wordseed_codec::from_entropy(&[0u8; 16]).unwrap();
//! assert!(mnemonic.as_str().ends_with("abandon about"));
//! assert!(wordseed_codec::is_valid(mnemonic.as_str(), None));
//! ```

pub mod bits;
pub mod codec;
pub mod hash;
pub mod mnemonic;
pub mod word_count;
pub mod wordlist;

use std::collections::BTreeMap;

pub use codec::{default_codec, Codec};
pub use mnemonic::{Mnemonic, Phrase};
pub use word_count::{WordCountEntry, WordCountTable};
pub use wordlist::{Wordlist, WORDLIST_LEN};
pub use wordseed_types::config::CodecConfig;
pub use wordseed_types::{Result, WordseedError};

/// Generates a random mnemonic of `word_count` words.
pub fn generate(word_count: usize) -> Result<Mnemonic> {
    default_codec().generate(word_count)
}

/// Encodes `entropy` as a mnemonic.
pub fn from_entropy(entropy: &[u8]) -> Result<Mnemonic> {
    default_codec().entropy_to_mnemonic(entropy)
}

/// Word-count and membership check; see [`Codec::is_valid`].
pub fn is_valid<P: Phrase + ?Sized>(mnemonic: &P, expected_word_count: Option<usize>) -> bool {
    default_codec().is_valid(mnemonic, expected_word_count)
}

pub fn wordlist() -> &'static [String] {
    default_codec().wordlist()
}

pub fn word_count_to_entropy_bits() -> BTreeMap<usize, usize> {
    default_codec().word_count_to_entropy_bits()
}

pub fn supported_word_counts() -> Vec<usize> {
    default_codec().supported_word_counts()
}

pub fn supported_entropy_bit_sizes() -> Vec<usize> {
    default_codec().supported_entropy_bit_sizes()
}
