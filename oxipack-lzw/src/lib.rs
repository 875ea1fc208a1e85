//! # OxiPack LZW
//!
//! Adaptive dictionary coding (Lempel-Ziv-Welch) over byte streams.
//!
//! ## Features
//!
//! - **Unbounded dictionary**: codes start at 256 and grow by one per
//!   emitted code for the life of one call; there is no maximum width and
//!   no clear code
//! - **KwKwK handling**: a code equal to the one about to be defined is
//!   rebuilt from the previous entry plus its own first byte
//! - **Variable-width packing**: [`pack_codes`] stores each code in exactly
//!   as many bits as the dictionary size at that point requires
//!
//! ## Example
//!
//! ```rust
//! use oxipack_lzw::{decode, encode, pack_codes, unpack_codes};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let codes = encode(original).unwrap();
//! assert!(codes.len() < original.len());
//!
//! let packed = pack_codes(&codes).unwrap();
//! let restored = decode(&unpack_codes(&packed).unwrap()).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod packing;

use oxipack_core::error::Result;

pub use codec::LzwCodec;
pub use decoder::LzwDecoder;
pub use dictionary::{DecodeDictionary, EncodeDictionary, FIRST_CODE, INITIAL_ENTRIES};
pub use encoder::LzwEncoder;
pub use packing::{code_width, pack_codes, unpack_codes};

/// Encode `data` into dictionary codes.
pub fn encode(data: &[u8]) -> Result<Vec<u32>> {
    LzwEncoder::new().encode(data)
}

/// Decode dictionary codes back into bytes.
pub fn decode(codes: &[u32]) -> Result<Vec<u8>> {
    LzwDecoder::new().decode(codes)
}
