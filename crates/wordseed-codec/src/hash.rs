//! SHA-256 hashing and BIP-39 checksum extraction.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Returns the leading `bits` bits of `SHA-256(entropy)` right-aligned in
/// a `u8`.
///
/// BIP-39 entropy is at most 256 bits, so the checksum never exceeds
/// 8 bits. Widths above 8 are clamped.
pub fn checksum(entropy: &[u8], bits: usize) -> u8 {
    let bits = bits.min(8);
    if bits == 0 {
        return 0;
    }
    sha256(entropy)[0] >> (8 - bits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
