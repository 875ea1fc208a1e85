//! # OxiPack LZ77
//!
//! Sliding-window LZ77 matching and token replay.
//!
//! Two matchers produce the same [`Lz77Token`] stream:
//!
//! - [`Lz77Encoder`]: hashed greedy matcher over a two-byte prefix index
//!   (window, lookahead and chain limit set by [`Lz77Config`])
//! - [`TripleEncoder`]: explicit trailing window searched by substring,
//!   emitting `(distance, length, next)` triples
//!
//! [`decompress`] replays either stream byte by byte, so overlapping copies
//! (`length > distance`) expand correctly.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_lz77::{Lz77Encoder, decompress};
//!
//! let input = b"abcabcabcabc";
//! let tokens = Lz77Encoder::new().compress(input);
//! assert!(tokens.len() < input.len());
//! assert_eq!(decompress(&tokens).unwrap(), input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod token;
pub mod triple;

// Re-exports
pub use codec::{Lz77Codec, Lz77Matcher};
pub use config::{CONTAINER_MAX_DISTANCE, CONTAINER_MAX_LENGTH, Lz77Config};
pub use decoder::decompress;
pub use encoder::{Lz77Encoder, MIN_MATCH};
pub use token::Lz77Token;
pub use triple::{Lz77Triple, TripleEncoder, decompress_triples};

/// Tokenize `data` with the hashed matcher.
pub fn compress(data: &[u8], config: Lz77Config) -> Vec<Lz77Token> {
    Lz77Encoder::with_config(config).compress(data)
}
