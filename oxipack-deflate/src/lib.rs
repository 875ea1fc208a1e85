//! # OxiPack Deflate
//!
//! A deflate-style pipeline chaining LZ77 tokenization into Huffman coding
//! inside one self-describing container.
//!
//! ## Pipeline
//!
//! ```text
//! compress:   bytes -> LZ77 tokens -> marker bytes -> Huffman -> container
//! decompress: container -> Huffman -> marker bytes -> LZ77 tokens -> bytes
//! ```
//!
//! Every stage boundary is validated on the way back: the container header,
//! the table blob, the payload length, each marker record and each
//! back-reference distance. Damage surfaces as an error rather than as
//! wrong output wherever the framing can detect it.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_deflate::{compress, decompress};
//!
//! let original = b"Hello, World! Hello, World!";
//! let container = compress(original).unwrap();
//! assert_eq!(decompress(&container).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod container;
pub mod serialize;

use oxipack_core::error::Result;
use oxipack_lz77::Lz77Config;

// Re-exports
pub use composite::CompositeCodec;
pub use container::{HEADER_SIZE, declared_blob_len, read_container, write_container};
pub use serialize::{MARKER_BACKREF, MARKER_LITERAL, bytes_to_tokens, tokens_to_bytes};

/// Compress `data` with the default LZ77 configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    CompositeCodec::new().compress(data)
}

/// Compress `data` with explicit LZ77 parameters.
pub fn compress_with(data: &[u8], config: Lz77Config) -> Result<Vec<u8>> {
    CompositeCodec::with_config(config).compress(data)
}

/// Decompress a container.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    CompositeCodec::new().decompress(container)
}
