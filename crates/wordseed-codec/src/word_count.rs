//! Supported mnemonic sizes.
//!
//! Each entry ties a word count to the entropy it encodes. For every
//! entry `ENT` is a multiple of 32, the checksum is `ENT / 32` bits, and
//! `ENT + CS == words * 11`.
//!
//! | Words | ENT | CS | Standard |
//! |-------|-----|----|----------|
//! | 3     | 32  | 1  | no       |
//! | 6     | 64  | 2  | no       |
//! | 12    | 128 | 4  | yes      |
//! | 15    | 160 | 5  | yes      |
//! | 18    | 192 | 6  | yes      |
//! | 21    | 224 | 7  | yes      |
//! | 24    | 256 | 8  | yes      |

use std::collections::BTreeMap;

/// Bits encoded by a single word.
pub const BITS_PER_WORD: usize = 11;

/// One row of the word-count table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordCountEntry {
    pub words: usize,
    pub entropy_bits: usize,
    /// `true` for the sizes defined by BIP-39 itself.
    pub standard: bool,
}

impl WordCountEntry {
    const fn new(words: usize, entropy_bits: usize, standard: bool) -> Self {
        Self {
            words,
            entropy_bits,
            standard,
        }
    }

    pub const fn entropy_bytes(&self) -> usize {
        self.entropy_bits / 8
    }

    pub const fn checksum_bits(&self) -> usize {
        self.entropy_bits / 32
    }

    pub const fn total_bits(&self) -> usize {
        self.entropy_bits + self.checksum_bits()
    }
}

/// Every size the codec knows, ascending by word count.
pub const ALL_WORD_COUNTS: &[WordCountEntry] = &[
    WordCountEntry::new(3, 32, false),
    WordCountEntry::new(6, 64, false),
    WordCountEntry::new(12, 128, true),
    WordCountEntry::new(15, 160, true),
    WordCountEntry::new(18, 192, true),
    WordCountEntry::new(21, 224, true),
    WordCountEntry::new(24, 256, true),
];

/// A view over [`ALL_WORD_COUNTS`], optionally restricted to the
/// standard sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordCountTable {
    allow_extended: bool,
}

impl WordCountTable {
    /// Table including the short 3- and 6-word sizes.
    pub const fn extended() -> Self {
        Self {
            allow_extended: true,
        }
    }

    /// Table limited to 12, 15, 18, 21 and 24 words.
    pub const fn standard() -> Self {
        Self {
            allow_extended: false,
        }
    }

    pub const fn new(allow_extended: bool) -> Self {
        Self { allow_extended }
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static WordCountEntry> {
        let allow_extended = self.allow_extended;
        ALL_WORD_COUNTS
            .iter()
            .filter(move |e| allow_extended || e.standard)
    }

    pub fn by_word_count(&self, words: usize) -> Option<&'static WordCountEntry> {
        self.entries().find(|e| e.words == words)
    }

    pub fn by_entropy_bits(&self, bits: usize) -> Option<&'static WordCountEntry> {
        self.entries().find(|e| e.entropy_bits == bits)
    }

    pub fn word_counts(&self) -> Vec<usize> {
        self.entries().map(|e| e.words).collect()
    }

    pub fn entropy_bit_sizes(&self) -> Vec<usize> {
        self.entries().map(|e| e.entropy_bits).collect()
    }

    pub fn to_map(&self) -> BTreeMap<usize, usize> {
        self.entries().map(|e| (e.words, e.entropy_bits)).collect()
    }
}

impl Default for WordCountTable {
    fn default() -> Self {
        Self::extended()
    }
}

/// Word counts accepted by validation when no explicit count is given.
pub fn standard_word_counts() -> Vec<usize> {
    WordCountTable::standard().word_counts()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_consistent() {
        for entry in ALL_WORD_COUNTS {
            assert_eq!(entry.entropy_bits % 32, 0, "{entry:?}");
            assert_eq!(entry.total_bits() % BITS_PER_WORD, 0, "{entry:?}");
            assert_eq!(entry.total_bits() / BITS_PER_WORD, entry.words, "{entry:?}");
        }
    }

    #[test]
    fn table_is_ascending() {
        assert!(ALL_WORD_COUNTS.windows(2).all(|p| p[0].words < p[1].words));
    }

    #[test]
    fn extended_table() {
        let table = WordCountTable::extended();
        assert_eq!(table.word_counts(), vec![3, 6, 12, 15, 18, 21, 24]);
        assert_eq!(
            table.entropy_bit_sizes(),
            vec![32, 64, 128, 160, 192, 224, 256]
        );
        assert_eq!(table.to_map().get(&6), Some(&64));
    }

    #[test]
    fn standard_table() {
        let table = WordCountTable::standard();
        assert_eq!(table.word_counts(), vec![12, 15, 18, 21, 24]);
        assert!(table.by_word_count(3).is_none());
        assert!(table.by_entropy_bits(64).is_none());
        assert_eq!(standard_word_counts(), vec![12, 15, 18, 21, 24]);
    }

    #[test]
    fn lookups() {
        let table = WordCountTable::default();
        let entry = table.by_word_count(18);
        assert_eq!(entry.map(|e| e.entropy_bits), Some(192));
        assert_eq!(entry.map(|e| e.checksum_bits()), Some(6));
        assert_eq!(table.by_entropy_bits(256).map(|e| e.words), Some(24));
        assert_eq!(table.by_entropy_bits(32).map(|e| e.entropy_bytes()), Some(4));
        assert!(table.by_word_count(13).is_none());
        assert!(table.by_entropy_bits(8).is_none());
    }
}
