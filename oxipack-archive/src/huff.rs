//! The Huffman file artifact.
//!
//! ## Layout
//!
//! ```text
//! +--------+---------+----------+------+----------+-----------+-------+-------------+---------+
//! | "OXPH" | version | name len | name | bit len  | table len | table | payload len | payload |
//! | 4      | u8 = 1  | u16 BE   | UTF-8| u64 BE   | u32 BE    |       | u32 BE      |         |
//! +--------+---------+----------+------+----------+-----------+-------+-------------+---------+
//! ```
//!
//! The table is the code table schema v1. The payload holds exactly
//! `ceil(bit len / 8)` bytes.

use oxipack_core::bitstream::bytes_for_bits;
use oxipack_core::cursor::ByteReader;
use oxipack_core::error::{OxiPackError, Result};
use oxipack_huffman::{CodeTable, HuffmanEncoded};

/// Leading bytes of every Huffman artifact.
pub const MAGIC: [u8; 4] = *b"OXPH";

/// Current record version.
pub const RECORD_VERSION: u8 = 1;

/// A Huffman encode together with the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanRecord {
    /// Name of the original file; its extension is restored on decompression.
    pub file_name: String,
    /// The encoded payload, bit count and code table.
    pub encoded: HuffmanEncoded,
}

impl HuffmanRecord {
    /// Bundle an encode with its file name.
    pub fn new(file_name: impl Into<String>, encoded: HuffmanEncoded) -> Self {
        Self {
            file_name: file_name.into(),
            encoded,
        }
    }

    /// Serialize the record.
    ///
    /// Fails with `InvalidInput` if the name or any section is too long for
    /// its length field.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let name = self.file_name.as_bytes();
        let name_len = u16::try_from(name.len()).map_err(|_| {
            OxiPackError::invalid_input(format!("file name of {} bytes is too long", name.len()))
        })?;

        let table = self.encoded.table.to_bytes();
        let table_len = section_len(table.len(), "code table")?;
        let payload = &self.encoded.payload;
        let payload_len = section_len(payload.len(), "payload")?;

        let mut out = Vec::with_capacity(
            MAGIC.len() + 1 + 2 + name.len() + 8 + 4 + table.len() + 4 + payload.len(),
        );
        out.extend_from_slice(&MAGIC);
        out.push(RECORD_VERSION);
        out.extend_from_slice(&name_len.to_be_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(&self.encoded.bit_count.to_be_bytes());
        out.extend_from_slice(&table_len.to_be_bytes());
        out.extend_from_slice(&table);
        out.extend_from_slice(&payload_len.to_be_bytes());
        out.extend_from_slice(payload);

        Ok(out)
    }

    /// Parse a record, validating every field.
    ///
    /// Fails with `CorruptArchive` on a wrong magic or version, a name that
    /// is not UTF-8, a malformed table, a payload length that disagrees with
    /// the bit length, truncation, or trailing bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);

        let magic = reader.read_bytes(MAGIC.len())?;
        if magic != MAGIC {
            return Err(OxiPackError::corrupt_archive(
                "not a Huffman artifact (bad magic)",
            ));
        }

        let version = reader.read_u8()?;
        if version != RECORD_VERSION {
            return Err(OxiPackError::corrupt_archive(format!(
                "unsupported Huffman record version {}",
                version
            )));
        }

        let name_len = reader.read_u16()? as usize;
        let file_name = std::str::from_utf8(reader.read_bytes(name_len)?)
            .map_err(|e| OxiPackError::corrupt_archive(format!("file name is not UTF-8: {}", e)))?
            .to_owned();

        let bit_count = reader.read_u64()?;

        let table_len = reader.read_u32()? as usize;
        let table = CodeTable::from_bytes(reader.read_bytes(table_len)?)?;

        let payload_len = reader.read_u32()? as usize;
        let payload = reader.read_bytes(payload_len)?.to_vec();
        reader.expect_end()?;

        if payload.len() as u64 != bytes_for_bits(bit_count) {
            return Err(OxiPackError::corrupt_archive(format!(
                "payload is {} bytes but {} bits need {}",
                payload.len(),
                bit_count,
                bytes_for_bits(bit_count)
            )));
        }

        Ok(Self {
            file_name,
            encoded: HuffmanEncoded {
                payload,
                bit_count,
                table,
            },
        })
    }
}

fn section_len(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| OxiPackError::invalid_input(format!("{} of {} bytes is too long", what, len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::ErrorKind;

    fn record() -> HuffmanRecord {
        HuffmanRecord::new("notes.txt", oxipack_huffman::encode(b"abracadabra").unwrap())
    }

    #[test]
    fn test_layout() {
        let bytes = record().to_bytes().unwrap();
        assert_eq!(&bytes[..4], b"OXPH");
        assert_eq!(bytes[4], RECORD_VERSION);
        assert_eq!(&bytes[5..7], &[0, 9]);
        assert_eq!(&bytes[7..16], b"notes.txt");
    }

    #[test]
    fn test_parse_back() {
        let original = record();
        let parsed = HuffmanRecord::from_bytes(&original.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_empty_name() {
        let original = HuffmanRecord::new("", oxipack_huffman::encode(b"x").unwrap());
        let parsed = HuffmanRecord::from_bytes(&original.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed.file_name, "");
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = record().to_bytes().unwrap();
        bytes[0] = b'X';
        let err = HuffmanRecord::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_bad_version() {
        let mut bytes = record().to_bytes().unwrap();
        bytes[4] = 2;
        assert!(HuffmanRecord::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_non_utf8_name() {
        let mut bytes = record().to_bytes().unwrap();
        bytes[7] = 0xFF;
        let err = HuffmanRecord::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_truncated_and_trailing() {
        let bytes = record().to_bytes().unwrap();
        for cut in [0, 3, 6, 20, bytes.len() - 1] {
            let err = HuffmanRecord::from_bytes(&bytes[..cut]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CorruptArchive);
        }

        let mut longer = bytes.clone();
        longer.push(0);
        assert!(HuffmanRecord::from_bytes(&longer).is_err());
    }

    #[test]
    fn test_bit_count_disagrees_with_payload() {
        let mut original = record();
        original.encoded.bit_count += 64;
        let err = HuffmanRecord::from_bytes(&original.to_bytes().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_name_too_long() {
        let original =
            HuffmanRecord::new("n".repeat(70_000), oxipack_huffman::encode(b"x").unwrap());
        let err = original.to_bytes().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
