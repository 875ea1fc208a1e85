//! LZW codec.

use crate::decoder::LzwDecoder;
use crate::encoder::LzwEncoder;
use oxipack_core::error::Result;
use oxipack_core::traits::Codec;

/// LZW codec over plain code lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwCodec;

impl LzwCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for LzwCodec {
    type Encoded = Vec<u32>;

    fn name(&self) -> &'static str {
        "lzw"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u32>> {
        LzwEncoder::new().encode(input)
    }

    fn decode(&self, encoded: &Vec<u32>) -> Result<Vec<u8>> {
        LzwDecoder::new().decode(encoded)
    }
}
