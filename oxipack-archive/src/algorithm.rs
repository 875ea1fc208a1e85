//! The closed set of algorithms an artifact can be produced with.
//!
//! LZ77 and LZW artifacts carry no self-description, so the algorithm has
//! to travel out of band: on the command line, or in the file name.

use std::fmt;
use std::str::FromStr;

/// Compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Byte-oriented Huffman coding.
    Huffman,
    /// LZ77 tokenization.
    Lz77,
    /// LZW dictionary coding.
    Lzw,
    /// LZ77 tokens entropy-coded with Huffman.
    Deflate,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Huffman,
        Algorithm::Lz77,
        Algorithm::Lzw,
        Algorithm::Deflate,
    ];

    /// Lowercase name, used in file names and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Huffman => "huffman",
            Self::Lz77 => "lz77",
            Self::Lzw => "lzw",
            Self::Deflate => "deflate",
        }
    }

    /// File extension of the compressed artifact (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Huffman => "huff",
            Self::Lz77 | Self::Lzw | Self::Deflate => "bin",
        }
    }

    /// Check whether the artifact records the original file name.
    pub fn stores_file_name(&self) -> bool {
        matches!(self, Self::Huffman)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Huffman => write!(f, "Huffman"),
            Self::Lz77 => write!(f, "LZ77"),
            Self::Lzw => write!(f, "LZW"),
            Self::Deflate => write!(f, "Deflate"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "huffman" | "huff" => Ok(Self::Huffman),
            "lz77" => Ok(Self::Lz77),
            "lzw" => Ok(Self::Lzw),
            "deflate" | "composite" => Ok(Self::Deflate),
            other => Err(format!(
                "unknown algorithm '{}' (expected one of: huffman, lz77, lzw, deflate)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
        }
        assert_eq!("HUFF".parse::<Algorithm>().unwrap(), Algorithm::Huffman);
        assert_eq!("composite".parse::<Algorithm>().unwrap(), Algorithm::Deflate);
        assert!("zstd".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Algorithm::Lz77.to_string(), "LZ77");
        assert_eq!(Algorithm::Deflate.to_string(), "Deflate");
    }

    #[test]
    fn test_extension() {
        assert_eq!(Algorithm::Huffman.extension(), "huff");
        assert_eq!(Algorithm::Lzw.extension(), "bin");
        assert!(Algorithm::Huffman.stores_file_name());
        assert!(!Algorithm::Deflate.stores_file_name());
    }
}
