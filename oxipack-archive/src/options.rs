//! Compression options shared by every algorithm.

use oxipack_lz77::Lz77Config;

pub use oxipack_lz77::Lz77Matcher;

/// Options for [`compress_bytes`](crate::compress_bytes) and
/// [`compress_file`](crate::compress_file).
///
/// Fields that do not apply to the chosen algorithm are ignored: Huffman and
/// LZW take no parameters, and only the Huffman artifact stores a file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// LZ77 parameters (LZ77 and Deflate). Deflate clamps them to what its
    /// serializer can frame.
    pub lz77: Lz77Config,
    /// LZ77 matching strategy (LZ77 and Deflate).
    pub matcher: Lz77Matcher,
    /// Original file name to record in a Huffman artifact. File-level
    /// compression fills it from the input path when unset.
    pub file_name: Option<String>,
}

impl Options {
    /// Options with the default LZ77 parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the LZ77 parameters.
    pub fn with_lz77(mut self, config: Lz77Config) -> Self {
        self.lz77 = config;
        self
    }

    /// Set the LZ77 matching strategy.
    pub fn with_matcher(mut self, matcher: Lz77Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Set the file name recorded in Huffman artifacts.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}
