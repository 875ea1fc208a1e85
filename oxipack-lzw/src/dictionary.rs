//! LZW dictionaries.
//!
//! Both sides start with the 256 single-byte sequences (codes 0-255) and
//! hand out new codes sequentially from [`FIRST_CODE`]. There is no maximum
//! width and no reset: a dictionary lives for exactly one call and grows
//! with the input.

use std::collections::HashMap;

/// Number of predefined single-byte entries.
pub const INITIAL_ENTRIES: u32 = 256;

/// First code assigned to a learned sequence.
pub const FIRST_CODE: u32 = INITIAL_ENTRIES;

/// Encoder-side dictionary.
///
/// A sequence is stored as `(code of its prefix, last byte)`, so extending
/// the current match is a single lookup with no byte-string hashing.
#[derive(Debug, Clone)]
pub struct EncodeDictionary {
    entries: HashMap<(u32, u8), u32>,
    next_code: u32,
}

impl EncodeDictionary {
    /// Create a dictionary holding only the single-byte entries.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_code: FIRST_CODE,
        }
    }

    /// Code of the sequence `prefix + byte`, if known.
    #[inline]
    pub fn find(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.entries.get(&(prefix, byte)).copied()
    }

    /// Learn `prefix + byte`, returning its code.
    pub fn insert(&mut self, prefix: u32, byte: u8) -> u32 {
        let code = self.next_code;
        self.entries.insert((prefix, byte), code);
        self.next_code += 1;
        code
    }

    /// Code the next insertion will receive.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// Total number of entries, predefined ones included.
    pub fn len(&self) -> usize {
        INITIAL_ENTRIES as usize + self.entries.len()
    }

    /// Always false: the single-byte entries are never removed.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoder-side dictionary: code-indexed byte strings.
#[derive(Debug, Clone)]
pub struct DecodeDictionary {
    table: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    /// Create a dictionary holding only the single-byte entries.
    pub fn new() -> Self {
        Self {
            table: (0..INITIAL_ENTRIES).map(|b| vec![b as u8]).collect(),
        }
    }

    /// Sequence for `code`, if defined.
    #[inline]
    pub fn get(&self, code: u32) -> Option<&[u8]> {
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// Learn `sequence`, returning its code.
    pub fn push(&mut self, sequence: Vec<u8>) -> u32 {
        let code = self.next_code();
        self.table.push(sequence);
        code
    }

    /// Code the next insertion will receive.
    pub fn next_code(&self) -> u32 {
        self.table.len() as u32
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: the single-byte entries are never removed.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_dictionary() {
        let mut dict = EncodeDictionary::new();
        assert_eq!(dict.len(), 256);
        assert_eq!(dict.find(b'a' as u32, b'b'), None);

        assert_eq!(dict.insert(b'a' as u32, b'b'), 256);
        assert_eq!(dict.insert(256, b'c'), 257);
        assert_eq!(dict.find(b'a' as u32, b'b'), Some(256));
        assert_eq!(dict.find(256, b'c'), Some(257));
        assert_eq!(dict.next_code(), 258);
        assert_eq!(dict.len(), 258);
    }

    #[test]
    fn test_decode_dictionary() {
        let mut dict = DecodeDictionary::new();
        assert_eq!(dict.len(), 256);
        assert_eq!(dict.get(65), Some(&b"A"[..]));
        assert_eq!(dict.get(256), None);

        assert_eq!(dict.push(b"AB".to_vec()), 256);
        assert_eq!(dict.get(256), Some(&b"AB"[..]));
        assert_eq!(dict.next_code(), 257);
        assert!(!dict.is_empty());
    }
}
