//! MSB-first bit cursor over byte buffers.
//!
//! Mnemonic words carry 11 bits each, which never lines up with byte
//! boundaries, so both directions of the transform keep a running bit
//! offset instead of working byte by byte.

use zeroize::Zeroize;

/// Reads fixed-width big-endian fields from a byte slice.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Offset of the next unread bit.
    pos: usize,
    /// Number of readable bits, at most `data.len() * 8`.
    limit: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limit(data, data.len() * 8)
    }

    /// Reader that stops after `limit` bits. `limit` is clamped to the
    /// length of `data`.
    pub fn with_limit(data: &'a [u8], limit: usize) -> Self {
        Self {
            data,
            pos: 0,
            limit: limit.min(data.len() * 8),
        }
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    /// Reads the next `width` bits (1..=32) as an unsigned integer, or
    /// `None` if fewer than `width` bits remain.
    pub fn read(&mut self, width: usize) -> Option<u32> {
        if width == 0 || width > 32 || width > self.remaining() {
            return None;
        }

        let mut value: u32 = 0;
        let mut needed = width;
        while needed > 0 {
            let byte = self.data[self.pos / 8];
            let offset = self.pos % 8;
            let available = 8 - offset;
            let take = available.min(needed);

            // Bits [offset, offset + take) of `byte`, counted from the MSB.
            let shifted = byte >> (available - take);
            let mask = (1u16 << take) - 1;
            value = (value << take) | u32::from(shifted & mask as u8);

            self.pos += take;
            needed -= take;
        }

        Some(value)
    }
}

impl Iterator for BitReader<'_> {
    type Item = u16;

    /// Yields consecutive 11-bit word indices.
    fn next(&mut self) -> Option<u16> {
        // An 11-bit read always fits in u16.
        self.read(crate::word_count::BITS_PER_WORD).map(|v| v as u16)
    }
}

/// Appends fixed-width big-endian fields to a growing byte buffer.
///
/// The buffer is zeroized on drop.
#[derive(Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    len: usize,
}

impl BitWriter {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the low `width` bits (0..=32) of `value`, MSB first.
    pub fn write(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32);
        for i in (0..width).rev() {
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Written bytes; a trailing partial byte is zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for BitWriter {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
