//! Bit-level I/O operations for the codecs.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! in-memory data at the bit level. Huffman payloads and packed LZW code
//! lists are both built on top of them.
//!
//! # Bit Ordering
//!
//! OxiPack uses MSB-first (Most Significant Bit first) ordering: the first
//! bit written lands in bit 7 of the first byte. This is the order in which
//! a code read from the root of a prefix tree is naturally spelled out.
//!
//! # Padding
//!
//! The final byte is zero-padded. Because padding bits are indistinguishable
//! from data, the exact bit count is returned by [`BitWriter::finish`] and
//! must be handed back to [`BitReader::new`], which never reads past it.
//!
//! # Example
//!
//! ```
//! use oxipack_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bits(0b01, 2);
//! let (bytes, bits) = writer.finish();
//! assert_eq!(bytes, vec![0b1010_0000]);
//!
//! let mut reader = BitReader::new(&bytes, bits).unwrap();
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(2).unwrap(), 0b01);
//! assert!(reader.read_bit().is_err());
//! ```

use crate::error::{OxiPackError, Result};

/// An MSB-first bit reader over a byte slice, bounded by an explicit bit count.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Number of meaningful bits in `data`.
    bit_limit: u64,
    /// Next bit to read.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_limit` bits of `data`.
    ///
    /// Fails with `CorruptArchive` if `data` is too short to hold that many bits.
    pub fn new(data: &'a [u8], bit_limit: u64) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if bit_limit > available {
            return Err(OxiPackError::corrupt_archive(format!(
                "bit count {} exceeds payload of {} bits",
                bit_limit, available
            )));
        }

        Ok(Self {
            data,
            bit_limit,
            position: 0,
        })
    }

    /// Create a reader over every bit of `data`.
    pub fn whole(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_limit: data.len() as u64 * 8,
            position: 0,
        }
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.bit_limit {
            return Err(OxiPackError::corrupt_archive(format!(
                "bit stream exhausted at bit {}",
                self.position
            )));
        }

        let byte = self.data[(self.position / 8) as usize];
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;

        Ok((byte >> shift) & 1 == 1)
    }

    /// Read up to 32 bits, first bit read ending up most significant.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if u64::from(count) > self.remaining() {
            return Err(OxiPackError::corrupt_archive(format!(
                "need {} bits at bit {}, only {} left",
                count,
                self.position,
                self.remaining()
            )));
        }

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | u32::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// Total bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.position
    }

    /// Bits left before the limit.
    pub fn remaining(&self) -> u64 {
        self.bit_limit - self.position
    }

    /// Check whether every meaningful bit has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.bit_limit
    }
}

/// An MSB-first bit writer accumulating into a `Vec<u8>`.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Partial byte being filled from bit 7 downwards.
    current: u8,
    /// Number of bits already placed in `current`.
    bits_in_current: u8,
    /// Total bits written.
    total_bits: u64,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current |= u8::from(bit) << (7 - self.bits_in_current);
        self.bits_in_current += 1;
        self.total_bits += 1;

        if self.bits_in_current == 8 {
            self.output.push(self.current);
            self.current = 0;
            self.bits_in_current = 0;
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Total bits written so far (excluding padding).
    pub fn bits_written(&self) -> u64 {
        self.total_bits
    }

    /// Pad the last byte with zeros and return `(bytes, unpadded bit count)`.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        if self.bits_in_current > 0 {
            self.output.push(self.current);
        }
        (self.output, self.total_bits)
    }
}

/// Number of bytes needed to hold `bits` bits.
pub fn bytes_for_bits(bits: u64) -> u64 {
    bits.div_ceil(8)
}
