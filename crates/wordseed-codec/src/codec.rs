//! Entropy → mnemonic encoding and mnemonic validation.
//!
//! # Encoding (BIP-39)
//!
//! 1. Compute `SHA-256(entropy)` and keep the first `ENT / 32` bits as
//!    the checksum.
//! 2. Append the checksum bits to the entropy bits, MSB first.
//! 3. Split the result into 11-bit groups.
//! 4. Each group indexes the wordlist; the words are joined by spaces.
//!
//! # Validation
//!
//! [`Codec::is_valid`] checks word count and wordlist membership only.
//! The embedded checksum is checked by [`Codec::validate`] and
//! [`Codec::mnemonic_to_entropy`].

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use wordseed_types::config::CodecConfig;
use wordseed_types::{Result, WordseedError};
use zeroize::Zeroizing;

use crate::bits::{BitReader, BitWriter};
use crate::hash::checksum;
use crate::mnemonic::{Mnemonic, Phrase};
use crate::word_count::{
    standard_word_counts, WordCountEntry, WordCountTable, BITS_PER_WORD,
};
use crate::wordlist::Wordlist;

static DEFAULT_CODEC: OnceLock<Codec> = OnceLock::new();

/// Process-wide codec over the embedded English list with the extended
/// word-count table.
pub fn default_codec() -> &'static Codec {
    DEFAULT_CODEC.get_or_init(Codec::english)
}

/// A BIP-39 codec bound to one wordlist and one word-count table.
///
/// Cloning is cheap; the wordlist is shared.
#[derive(Clone, Debug)]
pub struct Codec {
    wordlist: Arc<Wordlist>,
    table: WordCountTable,
    default_word_count: usize,
}

impl Codec {
    /// Default word count for [`generate_default`](Self::generate_default).
    pub const DEFAULT_WORD_COUNT: usize = 24;

    /// Codec over the embedded English list, accepting every size in the
    /// extended table.
    pub fn english() -> Self {
        Self::new(Wordlist::english(), WordCountTable::extended())
    }

    pub fn new(wordlist: Arc<Wordlist>, table: WordCountTable) -> Self {
        Self {
            wordlist,
            table,
            default_word_count: Self::DEFAULT_WORD_COUNT,
        }
    }

    /// Builds a codec from configuration, loading the wordlist file when
    /// one is configured.
    ///
    /// # Errors
    ///
    /// - [`WordseedError::ConfigError`] if the config is invalid or its
    ///   default word count is not in the selected table.
    /// - [`WordseedError::WordlistError`] if the wordlist file cannot be
    ///   read or is malformed.
    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;

        let wordlist = match &config.wordlist_path {
            Some(path) => Arc::new(Wordlist::from_file(path)?),
            None => Wordlist::english(),
        };
        let table = WordCountTable::new(config.allow_extended_word_counts);

        if table.by_word_count(config.default_word_count).is_none() {
            let reason = format!(
                "default_word_count {} not in supported counts {:?}",
                config.default_word_count,
                table.word_counts()
            );
            tracing::warn!(%reason, "codec config rejected");
            return Err(WordseedError::ConfigError { reason });
        }

        Ok(Self {
            wordlist,
            table,
            default_word_count: config.default_word_count,
        })
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// Generates a random mnemonic of `word_count` words using the OS
    /// CSPRNG.
    ///
    /// # Errors
    ///
    /// [`WordseedError::InvalidWordCount`] if `word_count` is not in the
    /// table.
    pub fn generate(&self, word_count: usize) -> Result<Mnemonic> {
        self.generate_with_rng(word_count, &mut OsRng)
    }

    /// Generates a mnemonic of the configured default size.
    pub fn generate_default(&self) -> Result<Mnemonic> {
        self.generate(self.default_word_count)
    }

    /// Generates a mnemonic drawing entropy from `rng`.
    pub fn generate_with_rng<R>(&self, word_count: usize, rng: &mut R) -> Result<Mnemonic>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let entry = self.entry_for_word_count(word_count)?;

        let mut entropy = Zeroizing::new(vec![0u8; entry.entropy_bytes()]);
        rng.fill_bytes(&mut entropy);

        tracing::debug!(word_count, entropy_bits = entry.entropy_bits, "generating mnemonic");
        self.encode(entry, &entropy)
    }

    /// Like [`generate`](Self::generate), for callers that have already
    /// checked `word_count`.
    ///
    /// # Panics
    ///
    /// Panics if `word_count` is not in the table.
    pub fn generate_unchecked(&self, word_count: usize) -> Mnemonic {
        match self.generate(word_count) {
            Ok(mnemonic) => mnemonic,
            Err(e) => panic!("generate_unchecked: {e}"),
        }
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    /// Encodes raw entropy as a mnemonic.
    ///
    /// Deterministic: identical entropy always yields the identical
    /// mnemonic.
    ///
    /// # Errors
    ///
    /// [`WordseedError::InvalidEntropyLength`] if `entropy.len() * 8` is
    /// not a supported entropy size.
    pub fn entropy_to_mnemonic(&self, entropy: &[u8]) -> Result<Mnemonic> {
        let bits = entropy.len() * 8;
        let entry = self.table.by_entropy_bits(bits).ok_or_else(|| {
            WordseedError::InvalidEntropyLength {
                got_bits: bits,
                supported: self.table.entropy_bit_sizes(),
            }
        })?;

        self.encode(entry, entropy)
    }

    /// Like [`entropy_to_mnemonic`](Self::entropy_to_mnemonic), for
    /// callers that have already checked the entropy length.
    ///
    /// # Panics
    ///
    /// Panics if the entropy length is not supported.
    pub fn entropy_to_mnemonic_unchecked(&self, entropy: &[u8]) -> Mnemonic {
        match self.entropy_to_mnemonic(entropy) {
            Ok(mnemonic) => mnemonic,
            Err(e) => panic!("entropy_to_mnemonic_unchecked: {e}"),
        }
    }

    fn encode(&self, entry: &WordCountEntry, entropy: &[u8]) -> Result<Mnemonic> {
        let cs_bits = entry.checksum_bits();

        // Entropy followed by the checksum, left-aligned in one extra byte.
        let mut buf = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
        buf.extend_from_slice(entropy);
        buf.push(checksum(entropy, cs_bits) << (8 - cs_bits));

        let mut words = Vec::with_capacity(entry.words);
        for index in BitReader::with_limit(&buf, entry.total_bits()) {
            let word = self
                .wordlist
                .word(index)
                .ok_or_else(|| WordseedError::WordlistError {
                    reason: format!("word index {index} out of range"),
                })?;
            words.push(word);
        }

        debug_assert_eq!(words.len(), entry.words);
        tracing::debug!(word_count = words.len(), "mnemonic encoded");
        Ok(Mnemonic::from_words(&words))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Checks word count and wordlist membership.
    ///
    /// With `expected_word_count`, the phrase must have exactly that many
    /// words. Without it, the count must be one of the standard sizes
    /// (12, 15, 18, 21, 24) even when this codec accepts the short sizes
    /// for generation.
    ///
    /// The checksum is not verified; use [`validate`](Self::validate) for
    /// that.
    pub fn is_valid<P: Phrase + ?Sized>(
        &self,
        phrase: &P,
        expected_word_count: Option<usize>,
    ) -> bool {
        let words = phrase.words();

        let count_ok = match expected_word_count {
            Some(expected) => words.len() == expected,
            None => WordCountTable::standard().by_word_count(words.len()).is_some(),
        };
        if !count_ok {
            tracing::trace!(
                word_count = words.len(),
                ?expected_word_count,
                "word count rejected"
            );
            return false;
        }

        words.iter().all(|w| self.wordlist.contains(w))
    }

    /// Recovers the entropy encoded by a mnemonic, verifying word count,
    /// membership and checksum.
    ///
    /// # Errors
    ///
    /// - [`WordseedError::InvalidWordCount`] if the count is not in the
    ///   table.
    /// - [`WordseedError::UnknownWord`] for the first word not in the
    ///   wordlist.
    /// - [`WordseedError::ChecksumMismatch`] if the checksum bits do not
    ///   match the entropy.
    pub fn mnemonic_to_entropy<P: Phrase + ?Sized>(
        &self,
        phrase: &P,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let words = phrase.words();
        let entry = self.entry_for_word_count(words.len())?;

        let mut writer = BitWriter::with_capacity(entry.total_bits());
        for word in &words {
            let index = self
                .wordlist
                .index_of(word)
                .ok_or_else(|| WordseedError::UnknownWord {
                    word: (*word).to_owned(),
                })?;
            writer.write(u32::from(index), BITS_PER_WORD);
        }

        let packed = writer.as_bytes();
        let entropy = Zeroizing::new(packed[..entry.entropy_bytes()].to_vec());

        let cs_bits = entry.checksum_bits();
        let provided = BitReader::new(&packed[entry.entropy_bytes()..])
            .read(cs_bits)
            .ok_or(WordseedError::ChecksumMismatch)?;

        if provided != u32::from(checksum(&entropy, cs_bits)) {
            tracing::trace!(word_count = words.len(), "checksum mismatch");
            return Err(WordseedError::ChecksumMismatch);
        }

        Ok(entropy)
    }

    /// Strict validation: [`mnemonic_to_entropy`](Self::mnemonic_to_entropy)
    /// without keeping the entropy.
    pub fn validate<P: Phrase + ?Sized>(&self, phrase: &P) -> Result<()> {
        self.mnemonic_to_entropy(phrase).map(drop)
    }

    /// Predicate form of [`validate`](Self::validate).
    pub fn is_valid_checksum<P: Phrase + ?Sized>(&self, phrase: &P) -> bool {
        self.validate(phrase).is_ok()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The 2048 words, in index order.
    pub fn wordlist(&self) -> &[String] {
        self.wordlist.words()
    }

    pub fn wordlist_handle(&self) -> &Arc<Wordlist> {
        &self.wordlist
    }

    pub fn table(&self) -> WordCountTable {
        self.table
    }

    pub fn default_word_count(&self) -> usize {
        self.default_word_count
    }

    pub fn word_count_to_entropy_bits(&self) -> BTreeMap<usize, usize> {
        self.table.to_map()
    }

    pub fn supported_word_counts(&self) -> Vec<usize> {
        self.table.word_counts()
    }

    pub fn supported_entropy_bit_sizes(&self) -> Vec<usize> {
        self.table.entropy_bit_sizes()
    }

    /// Counts accepted by [`is_valid`](Self::is_valid) without an explicit
    /// expectation.
    pub fn standard_word_counts(&self) -> Vec<usize> {
        standard_word_counts()
    }

    fn entry_for_word_count(&self, word_count: usize) -> Result<&'static WordCountEntry> {
        self.table
            .by_word_count(word_count)
            .ok_or_else(|| WordseedError::InvalidWordCount {
                requested: word_count,
                supported: self.table.word_counts(),
            })
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::english()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon about";

    #[test]
    fn generate_every_supported_size() -> std::result::Result<(), WordseedError> {
        let codec = Codec::english();
        for count in codec.supported_word_counts() {
            let mnemonic = codec.generate(count)?;
            assert_eq!(mnemonic.word_count(), count);
            codec.validate(&mnemonic)?;
        }
        Ok(())
    }

    #[test]
    fn generate_rejects_unsupported_size() {
        let codec = Codec::english();
        let err = codec.generate(13).err();
        assert_eq!(
            err,
            Some(WordseedError::InvalidWordCount {
                requested: 13,
                supported: vec![3, 6, 12, 15, 18, 21, 24],
            })
        );
    }

    #[test]
    fn generate_default_uses_24_words() -> std::result::Result<(), WordseedError> {
        let mnemonic = Codec::english().generate_default()?;
        assert_eq!(mnemonic.word_count(), 24);
        Ok(())
    }

    #[test]
    fn generated_mnemonics_differ() -> std::result::Result<(), WordseedError> {
        let codec = Codec::english();
        let a = codec.generate(24)?;
        let b = codec.generate(24)?;
        assert_ne!(a.as_str(), b.as_str());
        Ok(())
    }

    #[test]
    fn seeded_rng_is_reproducible() -> std::result::Result<(), WordseedError> {
        let codec = Codec::english();
        let a = codec.generate_with_rng(12, &mut StdRng::seed_from_u64(7))?;
        let b = codec.generate_with_rng(12, &mut StdRng::seed_from_u64(7))?;
        let c = codec.generate_with_rng(12, &mut StdRng::seed_from_u64(8))?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }

    #[test]
    fn entropy_all_zeros_128() -> std::result::Result<(), WordseedError> {
        let mnemonic = Codec::english().entropy_to_mnemonic(&[0u8; 16])?;
        assert_eq!(mnemonic.as_str(), ZERO_12);
        Ok(())
    }

    #[test]
    fn entropy_short_sizes() -> std::result::Result<(), WordseedError> {
        let codec = Codec::english();
        assert_eq!(
            codec.entropy_to_mnemonic(&[0u8; 4])?.as_str(),
            "abandon abandon ability"
        );
        assert_eq!(codec.entropy_to_mnemonic(&[0xFF; 4])?.as_str(), "zoo zoo zoo");
        assert_eq!(
            codec.entropy_to_mnemonic(&[1, 2, 3, 4, 5, 6, 7, 8])?.as_str(),
            "absurd avoid scissors anxiety gather loud"
        );
        Ok(())
    }

    #[test]
    fn entropy_length_rejected() {
        let codec = Codec::english();
        for len in [0usize, 1, 3, 15, 17, 33] {
            let entropy = vec![0u8; len];
            assert!(matches!(
                codec.entropy_to_mnemonic(&entropy),
                Err(WordseedError::InvalidEntropyLength { got_bits, .. }) if got_bits == len * 8
            ));
        }
    }

    #[test]
    fn standard_table_rejects_short_sizes() {
        let codec = Codec::new(Wordlist::english(), WordCountTable::standard());
        assert!(codec.entropy_to_mnemonic(&[0u8; 4]).is_err());
        assert!(codec.generate(6).is_err());
        assert_eq!(codec.supported_word_counts(), vec![12, 15, 18, 21, 24]);
    }

    #[test]
    #[should_panic(expected = "invalid word count 7")]
    fn generate_unchecked_panics() {
        let _ = Codec::english().generate_unchecked(7);
    }

    #[test]
    #[should_panic(expected = "invalid entropy length of 8 bits")]
    fn entropy_to_mnemonic_unchecked_panics() {
        let _ = Codec::english().entropy_to_mnemonic_unchecked(&[1]);
    }

    #[test]
    fn unchecked_succeeds_on_valid_input() {
        let codec = Codec::english();
        assert_eq!(codec.entropy_to_mnemonic_unchecked(&[0u8; 16]).as_str(), ZERO_12);
        assert_eq!(codec.generate_unchecked(15).word_count(), 15);
    }

    #[test]
    fn is_valid_membership_and_length() {
        let codec = Codec::english();
        assert!(codec.is_valid(ZERO_12, None));
        assert!(!codec.is_valid("word", None));
        assert!(!codec.is_valid("", None));
        assert!(!codec.is_valid("abandon abandon ability", None));
        assert!(codec.is_valid("abandon abandon ability", Some(3)));
        assert!(!codec.is_valid("abandon abandon ability", Some(12)));
        assert!(!codec.is_valid(&ZERO_12.replace("about", "aboot"), None));
    }

    #[test]
    fn is_valid_ignores_checksum() {
        let codec = Codec::english();
        let phrase = "abandon ".repeat(12);
        assert!(codec.is_valid(phrase.as_str(), None));
        assert!(!codec.is_valid_checksum(phrase.as_str()));
    }

    #[test]
    fn is_valid_is_case_sensitive() {
        let codec = Codec::english();
        assert!(!codec.is_valid(&ZERO_12.to_uppercase(), None));
    }

    #[test]
    fn is_valid_without_count_uses_standard_sizes() {
        let codec = Codec::english();
        for count in 0..=30 {
            let words = vec!["abandon"; count];
            let standard = matches!(count, 12 | 15 | 18 | 21 | 24);
            assert_eq!(codec.is_valid(&words, None), standard, "{count} words");
        }
    }

    #[test]
    fn mnemonic_to_entropy_roundtrip() -> std::result::Result<(), WordseedError> {
        let codec = Codec::english();
        let entropy = [0x42u8; 20];
        let mnemonic = codec.entropy_to_mnemonic(&entropy)?;
        let recovered = codec.mnemonic_to_entropy(&mnemonic)?;
        assert_eq!(recovered.as_slice(), &entropy);
        Ok(())
    }

    #[test]
    fn mnemonic_to_entropy_errors() {
        let codec = Codec::english();
        assert!(matches!(
            codec.mnemonic_to_entropy("abandon abandon"),
            Err(WordseedError::InvalidWordCount { requested: 2, .. })
        ));
        assert_eq!(
            codec
                .mnemonic_to_entropy(&ZERO_12.replace("about", "aboot"))
                .err(),
            Some(WordseedError::UnknownWord {
                word: "aboot".into()
            })
        );
        assert_eq!(
            codec.validate(&"abandon ".repeat(12)).err(),
            Some(WordseedError::ChecksumMismatch)
        );
    }

    #[test]
    fn from_config_defaults() -> std::result::Result<(), WordseedError> {
        let codec = Codec::from_config(&CodecConfig::default())?;
        assert_eq!(codec.default_word_count(), 24);
        assert_eq!(codec.supported_word_counts(), vec![3, 6, 12, 15, 18, 21, 24]);
        assert!(Arc::ptr_eq(codec.wordlist_handle(), &Wordlist::english()));
        Ok(())
    }

    #[test]
    fn from_config_rejects_default_outside_table() {
        let config = CodecConfig {
            default_word_count: 6,
            allow_extended_word_counts: false,
            wordlist_path: None,
        };
        match Codec::from_config(&config) {
            Err(WordseedError::ConfigError { reason }) => {
                assert!(reason.contains("default_word_count 6"), "{reason}");
                assert!(reason.contains("[12, 15, 18, 21, 24]"), "{reason}");
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }

        let config = CodecConfig {
            default_word_count: 13,
            ..CodecConfig::default()
        };
        assert!(matches!(
            Codec::from_config(&config),
            Err(WordseedError::ConfigError { .. })
        ));
    }

    #[test]
    fn from_config_with_wordlist_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!(
            "wordseed_test_wordlist_{}.txt",
            std::process::id()
        ));
        let text: String = (0..2048).map(|i| format!("w{i:04}\n")).collect();
        std::fs::write(&path, text)?;

        let config = CodecConfig {
            default_word_count: 12,
            allow_extended_word_counts: false,
            wordlist_path: Some(path.clone()),
        };
        let result = Codec::from_config(&config);
        let _ = std::fs::remove_file(&path);

        let codec = result?;
        let mnemonic = codec.entropy_to_mnemonic(&[0u8; 16])?;
        assert_eq!(mnemonic.words()[0], "w0000");
        assert_eq!(mnemonic.words()[11], "w0003");
        assert_eq!(codec.default_word_count(), 12);
        Ok(())
    }

    #[test]
    fn accessors_expose_table() {
        let codec = Codec::english();
        assert_eq!(codec.wordlist().len(), 2048);
        assert_eq!(
            codec.supported_entropy_bit_sizes(),
            vec![32, 64, 128, 160, 192, 224, 256]
        );
        assert_eq!(codec.word_count_to_entropy_bits().get(&24), Some(&256));
        assert_eq!(codec.standard_word_counts(), vec![12, 15, 18, 21, 24]);
        assert_eq!(codec.table(), WordCountTable::extended());
    }

    #[test]
    fn default_codec_is_shared() {
        assert!(std::ptr::eq(default_codec(), default_codec()));
        assert_eq!(default_codec().default_word_count(), 24);
    }
}
