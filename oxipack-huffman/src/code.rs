//! Prefix codes and the serialized code table.
//!
//! # Code Table Schema (version 1)
//!
//! ```text
//! +---------+---------------------+----------------------------------------+
//! | version | symbol count (BE)   | entries, ascending by symbol           |
//! | u8 = 1  | u16, 1..=256        | symbol u8 | bit length u8 | code bytes |
//! +---------+---------------------+----------------------------------------+
//! ```
//!
//! Code bytes hold `ceil(bit length / 8)` bytes, bits MSB-first, the unused
//! low bits of the last byte zero.

use oxipack_core::cursor::ByteReader;
use oxipack_core::error::{OxiPackError, Result};
use std::fmt;
use std::str::FromStr;

/// Longest code a 256-symbol alphabet can produce (a fully skewed tree).
pub const MAX_CODE_LENGTH: usize = 255;

/// Current code table schema version.
pub const TABLE_VERSION: u8 = 1;

/// Number of byte values in the alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// A variable-length bit string read from the root of a prefix tree.
///
/// Bits past `len` are always zero, so equality and hashing only see the
/// meaningful bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    len: u8,
    bits: [u8; 32],
}

impl Code {
    /// The empty bit string.
    pub const fn empty() -> Self {
        Self {
            len: 0,
            bits: [0; 32],
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Check whether the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        debug_assert!(self.len() < MAX_CODE_LENGTH, "code exceeds {MAX_CODE_LENGTH} bits");
        let index = self.len();
        if bit {
            self.bits[index / 8] |= 0x80 >> (index % 8);
        }
        self.len += 1;
    }

    /// Copy of this code with `bit` appended.
    pub fn with(mut self, bit: bool) -> Self {
        self.push(bit);
        self
    }

    /// Bit at `index` (0 is the bit taken at the root).
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len());
        self.bits[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /// Bits in root-to-leaf order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    /// Check whether `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && (0..self.len()).all(|i| self.bit(i) == other.bit(i))
    }

    /// The packed bytes: `ceil(len / 8)` bytes, MSB-first.
    pub fn packed(&self) -> &[u8] {
        &self.bits[..self.len().div_ceil(8)]
    }

    /// Rebuild a code from its bit length and packed bytes.
    ///
    /// Fails with `CorruptArchive` if the byte count does not match or a
    /// padding bit is set.
    pub fn from_packed(len: u8, packed: &[u8]) -> Result<Self> {
        let byte_len = (len as usize).div_ceil(8);
        if packed.len() != byte_len {
            return Err(OxiPackError::corrupt_archive(format!(
                "code of {} bits needs {} bytes, got {}",
                len,
                byte_len,
                packed.len()
            )));
        }

        let mut code = Self::empty();
        code.bits[..byte_len].copy_from_slice(packed);
        code.len = len;

        let used_in_last = len as usize % 8;
        if used_in_last != 0 && packed[byte_len - 1] & (0xFF >> used_in_last) != 0 {
            return Err(OxiPackError::corrupt_archive(format!(
                "code of {} bits has non-zero padding",
                len
            )));
        }

        Ok(code)
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code(\"{}\")", self)
    }
}

impl FromStr for Code {
    type Err = OxiPackError;

    /// Parse a string of `0`/`1` characters.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_CODE_LENGTH {
            return Err(OxiPackError::invalid_input(format!(
                "code longer than {} bits",
                MAX_CODE_LENGTH
            )));
        }

        let mut code = Self::empty();
        for ch in s.chars() {
            match ch {
                '0' => code.push(false),
                '1' => code.push(true),
                other => {
                    return Err(OxiPackError::invalid_input(format!(
                        "invalid bit character {:?}",
                        other
                    )));
                }
            }
        }
        Ok(code)
    }
}

/// Mapping from byte value to its prefix code.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            codes: [None; ALPHABET_SIZE],
        }
    }

    /// Assign `code` to `symbol`, returning the previous code if any.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes[symbol as usize].replace(code)
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Check whether the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Symbols and codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Longest code length in the table.
    pub fn max_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Check that no code is a prefix of another and no code is empty.
    ///
    /// After a lexicographic sort, any prefix sits directly before one of
    /// its extensions, so only neighbours need comparing.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<Vec<bool>> = self.iter().map(|(_, c)| c.iter().collect()).collect();
        if codes.iter().any(|c| c.is_empty()) {
            return false;
        }
        codes.sort();

        codes.windows(2).all(|pair| !pair[1].starts_with(&pair[0]))
    }

    /// Size in bytes of [`CodeTable::to_bytes`].
    pub fn serialized_len(&self) -> usize {
        3 + self
            .iter()
            .map(|(_, c)| 2 + c.len().div_ceil(8))
            .sum::<usize>()
    }

    /// Serialize with schema version 1.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        out.push(TABLE_VERSION);
        out.extend_from_slice(&(self.len() as u16).to_be_bytes());

        for (symbol, code) in self.iter() {
            out.push(symbol);
            out.push(code.len() as u8);
            out.extend_from_slice(code.packed());
        }

        out
    }

    /// Deserialize a table, requiring `data` to be consumed exactly.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        let table = Self::read_from(&mut reader)?;
        reader.expect_end()?;
        Ok(table)
    }

    /// Deserialize a table from the cursor position.
    ///
    /// Fails with `CorruptArchive` on an unknown version, a count of zero or
    /// above 256, a zero-length code, symbols out of ascending order,
    /// non-zero padding, truncation, or a table that is not prefix-free.
    pub fn read_from(reader: &mut ByteReader<'_>) -> Result<Self> {
        let version = reader.read_u8()?;
        if version != TABLE_VERSION {
            return Err(OxiPackError::corrupt_archive(format!(
                "unsupported code table version {}",
                version
            )));
        }

        let count = reader.read_u16()? as usize;
        if count == 0 || count > ALPHABET_SIZE {
            return Err(OxiPackError::corrupt_archive(format!(
                "code table declares {} symbols",
                count
            )));
        }

        let mut table = Self::new();
        let mut previous: Option<u8> = None;

        for _ in 0..count {
            let symbol = reader.read_u8()?;
            if previous.is_some_and(|p| symbol <= p) {
                return Err(OxiPackError::corrupt_archive(format!(
                    "symbol {} out of order in code table",
                    symbol
                )));
            }
            previous = Some(symbol);

            let len = reader.read_u8()?;
            if len == 0 {
                return Err(OxiPackError::corrupt_archive(format!(
                    "symbol {} has an empty code",
                    symbol
                )));
            }

            let packed = reader.read_bytes((len as usize).div_ceil(8))?;
            table.insert(symbol, Code::from_packed(len, packed)?);
        }

        if !table.is_prefix_free() {
            return Err(OxiPackError::corrupt_archive(
                "code table is not prefix-free",
            ));
        }

        Ok(table)
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(s, c)| (s, c.to_string())))
            .finish()
    }
}
