//! Byte-level compression into persisted artifacts.
//!
//! | Algorithm | Artifact                                        |
//! |-----------|-------------------------------------------------|
//! | Huffman   | [`HuffmanRecord`](crate::huff::HuffmanRecord)   |
//! | LZ77      | token list, see [`tokens`](crate::tokens)       |
//! | LZW       | packed code list, see [`oxipack_lzw::pack_codes`] |
//! | Deflate   | the composite container, verbatim               |

use crate::algorithm::Algorithm;
use crate::huff::HuffmanRecord;
use crate::options::Options;
use crate::tokens::{read_tokens, write_tokens};
use oxipack_core::error::Result;
use oxipack_deflate::{CompositeCodec, declared_blob_len, read_container};
use oxipack_huffman::HuffmanCodec;
use oxipack_lz77::{Lz77Codec, Lz77Token};
use oxipack_lzw::{LzwDecoder, LzwEncoder, pack_codes, unpack_codes};
use std::fmt;

/// Compress `data` into the artifact of `algorithm`.
///
/// Fails with `InvalidInput` on empty data for Huffman, LZW and Deflate.
/// An empty LZ77 artifact is a valid, empty token list.
pub fn compress_bytes(data: &[u8], algorithm: Algorithm, options: &Options) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Huffman => {
            let encoded = HuffmanCodec::new().encode(data)?;
            let name = options.file_name.clone().unwrap_or_default();
            HuffmanRecord::new(name, encoded).to_bytes()
        }
        Algorithm::Lz77 => {
            let tokens = Lz77Codec::with_config(options.lz77, options.matcher).compress(data);
            write_tokens(&tokens)
        }
        Algorithm::Lzw => pack_codes(&LzwEncoder::new().encode(data)?),
        Algorithm::Deflate => {
            CompositeCodec::with_matcher(options.lz77, options.matcher).compress(data)
        }
    }
}

/// Recover the original bytes from an artifact of `algorithm`.
pub fn decompress_bytes(artifact: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Huffman => {
            let record = HuffmanRecord::from_bytes(artifact)?;
            let encoded = &record.encoded;
            HuffmanCodec::new().decode(&encoded.payload, encoded.bit_count, &encoded.table)
        }
        Algorithm::Lz77 => oxipack_lz77::decompress(&read_tokens(artifact)?),
        Algorithm::Lzw => LzwDecoder::new().decode(&unpack_codes(artifact)?),
        Algorithm::Deflate => CompositeCodec::new().decompress(artifact),
    }
}

/// Structural summary of an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactInfo {
    /// A Huffman record.
    Huffman {
        /// Stored original file name.
        file_name: String,
        /// Meaningful payload bits.
        bit_count: u64,
        /// Distinct symbols in the code table.
        symbols: usize,
        /// Longest code in bits.
        max_code_len: usize,
        /// Payload size in bytes.
        payload_len: usize,
    },
    /// An LZ77 token list.
    Lz77 {
        /// Total tokens.
        tokens: usize,
        /// Literal tokens.
        literals: usize,
        /// Back-reference tokens.
        backrefs: usize,
        /// Bytes the tokens expand to.
        output_len: usize,
    },
    /// A packed LZW code list.
    Lzw {
        /// Number of codes.
        codes: usize,
        /// Largest code value, if any.
        max_code: Option<u32>,
    },
    /// A deflate-style container.
    Deflate {
        /// Declared length of the table blob.
        blob_len: u32,
        /// Meaningful payload bits.
        bit_count: u64,
        /// Distinct marker-byte symbols in the code table.
        symbols: usize,
        /// Payload size in bytes.
        payload_len: usize,
    },
}

impl ArtifactInfo {
    /// Algorithm the artifact belongs to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Huffman { .. } => Algorithm::Huffman,
            Self::Lz77 { .. } => Algorithm::Lz77,
            Self::Lzw { .. } => Algorithm::Lzw,
            Self::Deflate { .. } => Algorithm::Deflate,
        }
    }
}

impl fmt::Display for ArtifactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm:    {}", self.algorithm())?;
        match self {
            Self::Huffman {
                file_name,
                bit_count,
                symbols,
                max_code_len,
                payload_len,
            } => {
                writeln!(f, "File name:    {}", file_name)?;
                writeln!(f, "Symbols:      {}", symbols)?;
                writeln!(f, "Longest code: {} bits", max_code_len)?;
                writeln!(f, "Bit length:   {}", bit_count)?;
                write!(f, "Payload:      {} bytes", payload_len)
            }
            Self::Lz77 {
                tokens,
                literals,
                backrefs,
                output_len,
            } => {
                writeln!(f, "Tokens:       {}", tokens)?;
                writeln!(f, "Literals:     {}", literals)?;
                writeln!(f, "Back-refs:    {}", backrefs)?;
                write!(f, "Expands to:   {} bytes", output_len)
            }
            Self::Lzw { codes, max_code } => {
                writeln!(f, "Codes:        {}", codes)?;
                match max_code {
                    Some(code) => write!(f, "Largest code: {}", code),
                    None => write!(f, "Largest code: -"),
                }
            }
            Self::Deflate {
                blob_len,
                bit_count,
                symbols,
                payload_len,
            } => {
                writeln!(f, "Table blob:   {} bytes", blob_len)?;
                writeln!(f, "Symbols:      {}", symbols)?;
                writeln!(f, "Bit length:   {}", bit_count)?;
                write!(f, "Payload:      {} bytes", payload_len)
            }
        }
    }
}

/// Parse the framing of an artifact without decoding its payload.
pub fn describe(artifact: &[u8], algorithm: Algorithm) -> Result<ArtifactInfo> {
    let info = match algorithm {
        Algorithm::Huffman => {
            let record = HuffmanRecord::from_bytes(artifact)?;
            ArtifactInfo::Huffman {
                bit_count: record.encoded.bit_count,
                symbols: record.encoded.table.len(),
                max_code_len: record.encoded.table.max_len(),
                payload_len: record.encoded.payload.len(),
                file_name: record.file_name,
            }
        }
        Algorithm::Lz77 => {
            let tokens = read_tokens(artifact)?;
            let backrefs = tokens.iter().filter(|t| t.is_backref()).count();
            ArtifactInfo::Lz77 {
                tokens: tokens.len(),
                literals: tokens.len() - backrefs,
                backrefs,
                output_len: tokens.iter().map(Lz77Token::output_len).sum(),
            }
        }
        Algorithm::Lzw => {
            let codes = unpack_codes(artifact)?;
            ArtifactInfo::Lzw {
                codes: codes.len(),
                max_code: codes.iter().copied().max(),
            }
        }
        Algorithm::Deflate => {
            let blob_len = declared_blob_len(artifact)?;
            let encoded = read_container(artifact)?;
            ArtifactInfo::Deflate {
                blob_len,
                bit_count: encoded.bit_count,
                symbols: encoded.table.len(),
                payload_len: encoded.payload.len(),
            }
        }
    };

    Ok(info)
}
