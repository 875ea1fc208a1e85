//! # OxiPack Archive
//!
//! Persisted artifact formats and the collaborator API used by front ends.
//!
//! This crate ties the codecs to storage:
//!
//! - [`Algorithm`]: the closed set of algorithms, dispatched exhaustively
//! - [`compress_bytes`] / [`decompress_bytes`]: in-memory artifacts
//! - [`compress_file`] / [`decompress_file`]: the same on disk, with the
//!   output naming conventions of [`naming`]
//! - [`describe`]: the framing of an artifact, without decoding it
//!
//! LZ77, LZW and Deflate artifacts do not record which algorithm produced
//! them; callers pass it back in on decompression.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_archive::{Algorithm, Options, compress_bytes, decompress_bytes};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! for alg in Algorithm::ALL {
//!     let artifact = compress_bytes(data, alg, &Options::new()).unwrap();
//!     assert_eq!(decompress_bytes(&artifact, alg).unwrap(), data);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod artifact;
pub mod file;
pub mod huff;
pub mod naming;
pub mod options;
pub mod tokens;

// Re-exports
pub use algorithm::Algorithm;
pub use artifact::{ArtifactInfo, compress_bytes, decompress_bytes, describe};
pub use file::{compress_file, decompress_file, original_candidate};
pub use huff::HuffmanRecord;
pub use naming::{compressed_name, decompressed_name};
pub use options::{Lz77Matcher, Options};
pub use oxipack_core::error::{ErrorKind, OxiPackError, Result};
pub use oxipack_lz77::Lz77Config;
