//! Huffman encoding and decoding of byte streams.

use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::tree::{DecodeTree, HuffmanTree, ROOT};
use oxipack_core::bitstream::{BitReader, BitWriter, bytes_for_bits};
use oxipack_core::error::{OxiPackError, Result};
use oxipack_core::traits::Codec;

/// Output of one Huffman encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanEncoded {
    /// Bit-packed codes, MSB-first, last byte zero-padded.
    pub payload: Vec<u8>,
    /// Number of meaningful bits in `payload`.
    pub bit_count: u64,
    /// Code table needed to decode `payload`.
    pub table: CodeTable,
}

/// Byte-oriented Huffman codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }

    /// Encode `data` through its own optimal prefix code.
    ///
    /// Fails with `InvalidInput` on empty data.
    pub fn encode(&self, data: &[u8]) -> Result<HuffmanEncoded> {
        let freq = FrequencyTable::from_data(data)?;
        let table = HuffmanTree::build(&freq)?.codes();

        let total_bits: u64 = freq
            .iter()
            .map(|(symbol, count)| count * table.get(symbol).map_or(0, |c| c.len() as u64))
            .sum();

        let mut writer = BitWriter::with_capacity(bytes_for_bits(total_bits) as usize);
        for &byte in data {
            let code = table.get(byte).ok_or_else(|| {
                OxiPackError::invalid_input(format!("no code generated for byte {}", byte))
            })?;
            for bit in code.iter() {
                writer.write_bit(bit);
            }
        }

        let (payload, bit_count) = writer.finish();
        debug_assert_eq!(bit_count, total_bits);

        Ok(HuffmanEncoded {
            payload,
            bit_count,
            table,
        })
    }

    /// Decode exactly `bit_count` bits of `payload` with `table`.
    ///
    /// Fails with `CorruptArchive` if the table is malformed, the payload
    /// length disagrees with `bit_count`, a bit leads off the tree, or the
    /// stream ends partway through a code.
    pub fn decode(&self, payload: &[u8], bit_count: u64, table: &CodeTable) -> Result<Vec<u8>> {
        let expected_len = bytes_for_bits(bit_count);
        if payload.len() as u64 != expected_len {
            return Err(OxiPackError::corrupt_archive(format!(
                "payload is {} bytes but {} bits need {}",
                payload.len(),
                bit_count,
                expected_len
            )));
        }

        let tree = DecodeTree::from_table(table)?;
        let mut reader = BitReader::new(payload, bit_count)?;
        let mut output = Vec::with_capacity(bit_count as usize / table.max_len().max(1));
        let mut node = ROOT;

        while !reader.is_exhausted() {
            let position = reader.bits_read();
            let bit = reader.read_bit()?;

            node = tree.child(node, bit).ok_or_else(|| {
                OxiPackError::corrupt_archive(format!(
                    "bit {} does not continue any code",
                    position
                ))
            })?;

            if let Some(symbol) = tree.symbol(node) {
                output.push(symbol);
                node = ROOT;
            }
        }

        if node != ROOT {
            return Err(OxiPackError::corrupt_archive(
                "bit stream ends inside a code",
            ));
        }

        Ok(output)
    }
}

impl Codec for HuffmanCodec {
    type Encoded = HuffmanEncoded;

    fn name(&self) -> &'static str {
        "huffman"
    }

    fn encode(&self, input: &[u8]) -> Result<HuffmanEncoded> {
        HuffmanCodec::encode(self, input)
    }

    fn decode(&self, encoded: &HuffmanEncoded) -> Result<Vec<u8>> {
        HuffmanCodec::decode(self, &encoded.payload, encoded.bit_count, &encoded.table)
    }
}
