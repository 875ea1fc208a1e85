//! Core trait implemented by every codec.
//!
//! Codecs are whole-buffer transforms: the entire input is held in memory,
//! each call builds its own tables, and no state survives between calls.
//! The encoded form is codec-specific (a bit-packed payload, a token list,
//! a code list or a container), hence the associated type.

use crate::error::Result;

/// A lossless, whole-buffer codec.
pub trait Codec {
    /// The encoded representation produced by [`Codec::encode`].
    type Encoded;

    /// Short lowercase name of the algorithm (e.g. `"lzw"`).
    fn name(&self) -> &'static str;

    /// Encode `input`.
    fn encode(&self, input: &[u8]) -> Result<Self::Encoded>;

    /// Decode a value previously produced by [`Codec::encode`].
    fn decode(&self, encoded: &Self::Encoded) -> Result<Vec<u8>>;

    /// Encode then decode, returning the recovered bytes.
    ///
    /// Handy for verifying that a configuration is lossless on a given input.
    fn roundtrip(&self, input: &[u8]) -> Result<Vec<u8>> {
        let encoded = self.encode(input)?;
        self.decode(&encoded)
    }
}
