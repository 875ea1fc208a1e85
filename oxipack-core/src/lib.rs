//! # OxiPack Core
//!
//! Core components shared by the OxiPack codecs.
//!
//! This crate provides the fundamental building blocks:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for prefix codes and packed code lists
//! - [`cursor`]: Big-endian byte cursor for parsing persisted artifacts
//! - [`traits`]: The [`Codec`] trait implemented by every codec
//! - [`error`]: Error taxonomy
//!
//! ## Architecture
//!
//! OxiPack is layered the same way as its sibling archivers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     oxipack compress / decompress / test / info        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Artifact                                            │
//! │     Algorithm dispatch, persisted formats, file naming │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Huffman, LZ77, LZW, Deflate-style composite        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     BitReader/BitWriter, ByteReader, Codec, errors     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipack_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//! let (bytes, bit_count) = writer.finish();
//! assert_eq!(bit_count, 7);
//!
//! let mut reader = BitReader::new(&bytes, bit_count).unwrap();
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod cursor;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use cursor::ByteReader;
pub use error::{ErrorKind, OxiPackError, Result};
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::cursor::ByteReader;
    pub use crate::error::{ErrorKind, OxiPackError, Result};
    pub use crate::traits::Codec;
}
