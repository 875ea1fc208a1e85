//! The LZ77 token-list artifact.
//!
//! `[count u32 BE]` followed by `count` records: `0x01 literal` or
//! `0x00 distance u32 BE length u32 BE`. Unlike the deflate container the
//! fields are full width, so any matcher configuration can be persisted.

use oxipack_core::cursor::ByteReader;
use oxipack_core::error::{OxiPackError, Result};
use oxipack_lz77::Lz77Token;

/// Tag of a back-reference record.
pub const TAG_BACKREF: u8 = 0x00;

/// Tag of a literal record.
pub const TAG_LITERAL: u8 = 0x01;

/// Serialize a token list.
pub fn write_tokens(tokens: &[Lz77Token]) -> Result<Vec<u8>> {
    let count = u32::try_from(tokens.len()).map_err(|_| {
        OxiPackError::invalid_input(format!("{} tokens do not fit the count field", tokens.len()))
    })?;

    let backrefs = tokens.iter().filter(|t| t.is_backref()).count();
    let mut out = Vec::with_capacity(4 + tokens.len() * 2 + backrefs * 7);
    out.extend_from_slice(&count.to_be_bytes());

    for token in tokens {
        match *token {
            Lz77Token::Literal(byte) => {
                out.push(TAG_LITERAL);
                out.push(byte);
            }
            Lz77Token::BackRef { distance, length } => {
                out.push(TAG_BACKREF);
                out.extend_from_slice(&distance.to_be_bytes());
                out.extend_from_slice(&length.to_be_bytes());
            }
        }
    }

    Ok(out)
}

/// Parse a token list.
///
/// Fails with `CorruptArchive` on an unknown tag, a truncated record, a
/// zero-length back-reference, or bytes beyond the declared count.
/// Distances are not checked here; replay reports them as `CorruptData`.
pub fn read_tokens(data: &[u8]) -> Result<Vec<Lz77Token>> {
    let mut reader = ByteReader::new(data);
    let count = reader.read_u32()? as usize;

    // Every record takes at least two bytes
    let mut tokens = Vec::with_capacity(count.min(reader.remaining() / 2));

    for index in 0..count {
        let tag = reader.read_u8()?;
        let token = match tag {
            TAG_LITERAL => Lz77Token::Literal(reader.read_u8()?),
            TAG_BACKREF => {
                let distance = reader.read_u32()?;
                let length = reader.read_u32()?;
                if length == 0 {
                    return Err(OxiPackError::corrupt_archive(format!(
                        "token {} is a zero-length back-reference",
                        index
                    )));
                }
                Lz77Token::BackRef { distance, length }
            }
            other => {
                return Err(OxiPackError::corrupt_archive(format!(
                    "token {} has unknown tag {:#04x}",
                    index, other
                )));
            }
        };
        tokens.push(token);
    }

    reader.expect_end()?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::ErrorKind;

    #[test]
    fn test_layout() {
        let tokens = [
            Lz77Token::Literal(b'a'),
            Lz77Token::BackRef {
                distance: 1,
                length: 300,
            },
        ];
        let bytes = write_tokens(&tokens).unwrap();
        assert_eq!(
            bytes,
            vec![0, 0, 0, 2, 0x01, b'a', 0x00, 0, 0, 0, 1, 0, 0, 0x01, 0x2C]
        );
        assert_eq!(read_tokens(&bytes).unwrap(), tokens);
    }

    #[test]
    fn test_empty_list() {
        let bytes = write_tokens(&[]).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert!(read_tokens(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        let err = read_tokens(&[0, 0, 0, 1, 0x07, b'a']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_count_mismatch() {
        // Declares two tokens, holds one
        let err = read_tokens(&[0, 0, 0, 2, 0x01, b'a']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);

        // Declares one token, holds two
        let err = read_tokens(&[0, 0, 0, 1, 0x01, b'a', 0x01, b'b']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_zero_length_backref() {
        // Well-formed record, but a back-reference must copy at least one byte
        let bytes = [0, 0, 0, 2, 0x01, b'a', 0x00, 0, 0, 0, 1, 0, 0, 0, 0];
        let err = read_tokens(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_short_header() {
        assert!(read_tokens(&[0, 0]).is_err());
        assert!(read_tokens(&[]).is_err());
    }
}
