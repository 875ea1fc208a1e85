//! The three-stage pipeline: LZ77 tokens, marker bytes, Huffman container.

use crate::container::{read_container, write_container};
use crate::serialize::{bytes_to_tokens, tokens_to_bytes};
use oxipack_core::error::Result;
use oxipack_core::traits::Codec;
use oxipack_huffman::HuffmanCodec;
use oxipack_lz77::{Lz77Codec, Lz77Config, Lz77Matcher, decompress};

/// Deflate-style composite codec.
///
/// The LZ77 configuration is always clamped to what the container can
/// frame (65535-byte distances, 255-byte lengths).
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeCodec {
    lz77: Lz77Codec,
}

impl CompositeCodec {
    /// Create a codec with the default LZ77 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with explicit LZ77 parameters and the hashed matcher.
    pub fn with_config(config: Lz77Config) -> Self {
        Self::with_matcher(config, Lz77Matcher::Hashed)
    }

    /// Create a codec with explicit LZ77 parameters and matcher.
    pub fn with_matcher(config: Lz77Config, matcher: Lz77Matcher) -> Self {
        Self {
            lz77: Lz77Codec::with_config(config.clamped_for_container(), matcher),
        }
    }

    /// Effective (clamped) LZ77 configuration.
    pub fn config(&self) -> &Lz77Config {
        self.lz77.config()
    }

    /// Compress `data` into a container.
    ///
    /// Fails with `InvalidInput` on empty data: the Huffman stage has no
    /// symbols to code.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let tokens = self.lz77.compress(data);
        let intermediate = tokens_to_bytes(&tokens)?;
        let encoded = HuffmanCodec::new().encode(&intermediate)?;
        write_container(&encoded)
    }

    /// Decompress a container produced by [`CompositeCodec::compress`].
    pub fn decompress(&self, container: &[u8]) -> Result<Vec<u8>> {
        let encoded = read_container(container)?;
        let intermediate =
            HuffmanCodec::new().decode(&encoded.payload, encoded.bit_count, &encoded.table)?;
        let tokens = bytes_to_tokens(&intermediate)?;
        decompress(&tokens)
    }
}

impl Codec for CompositeCodec {
    type Encoded = Vec<u8>;

    fn name(&self) -> &'static str {
        "deflate"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress(input)
    }

    fn decode(&self, encoded: &Vec<u8>) -> Result<Vec<u8>> {
        self.decompress(encoded)
    }
}
