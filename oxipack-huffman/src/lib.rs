//! # OxiPack Huffman
//!
//! Byte-oriented Huffman coding: frequency counting, deterministic tree
//! construction, prefix-code generation and bit-exact decoding.
//!
//! ## Features
//!
//! - **Deterministic trees**: ties are broken by `(weight, creation index)`,
//!   so the same input always yields the same code table
//! - **Exact bit counts**: decoding consumes exactly the recorded number of
//!   bits and never interprets pad bits as symbols
//! - **Versioned tables**: [`CodeTable`] serializes to a self-describing
//!   binary layout, validated (including prefix-freeness) on read
//!
//! ## Example
//!
//! ```rust
//! use oxipack_huffman::{decode, encode};
//!
//! let input = b"abracadabra";
//! let encoded = encode(input).unwrap();
//! let decoded = decode(&encoded.payload, encoded.bit_count, &encoded.table).unwrap();
//! assert_eq!(decoded, input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod code;
pub mod codec;
pub mod frequency;
pub mod tree;

use oxipack_core::error::Result;

// Re-exports
pub use code::{Code, CodeTable, MAX_CODE_LENGTH, TABLE_VERSION};
pub use codec::{HuffmanCodec, HuffmanEncoded};
pub use frequency::FrequencyTable;
pub use tree::{DecodeTree, HuffmanTree};

/// Count the occurrences of every byte in `data`.
pub fn build_frequency_table(data: &[u8]) -> Result<FrequencyTable> {
    FrequencyTable::from_data(data)
}

/// Build the Huffman tree for a frequency table.
pub fn build_tree(freq: &FrequencyTable) -> Result<HuffmanTree> {
    HuffmanTree::build(freq)
}

/// Derive the prefix code of every leaf of `tree`.
pub fn generate_codes(tree: &HuffmanTree) -> CodeTable {
    tree.codes()
}

/// Encode `data` with its own Huffman code.
pub fn encode(data: &[u8]) -> Result<HuffmanEncoded> {
    HuffmanCodec::new().encode(data)
}

/// Decode `bit_count` bits of `payload` using `table`.
pub fn decode(payload: &[u8], bit_count: u64, table: &CodeTable) -> Result<Vec<u8>> {
    HuffmanCodec::new().decode(payload, bit_count, table)
}
