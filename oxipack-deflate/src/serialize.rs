//! Token byte serialization between the LZ77 and Huffman stages.
//!
//! ```text
//! back-reference: [0x00][distance u16 BE][length u8]
//! literal:        [0x01][byte]
//! ```
//!
//! Back-references longer than 255 bytes are split into consecutive records
//! with the same distance; the copy continues from the same relative
//! position, so replaying the pieces is equivalent.

use oxipack_core::error::{OxiPackError, Result};
use oxipack_lz77::{CONTAINER_MAX_DISTANCE, CONTAINER_MAX_LENGTH, Lz77Token};

/// Marker byte of a back-reference record.
pub const MARKER_BACKREF: u8 = 0;

/// Marker byte of a literal record.
pub const MARKER_LITERAL: u8 = 1;

/// Serialize `tokens` into marker records.
///
/// Fails with `InvalidInput` if a distance is zero or above 65535, or a
/// back-reference has zero length.
pub fn tokens_to_bytes(tokens: &[Lz77Token]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(tokens.len() * 3);

    for token in tokens {
        match *token {
            Lz77Token::Literal(byte) => {
                out.push(MARKER_LITERAL);
                out.push(byte);
            }
            Lz77Token::BackRef { distance, length } => {
                if distance == 0 || distance > CONTAINER_MAX_DISTANCE {
                    return Err(OxiPackError::invalid_input(format!(
                        "distance {} cannot be framed (1..={})",
                        distance, CONTAINER_MAX_DISTANCE
                    )));
                }
                if length == 0 {
                    return Err(OxiPackError::invalid_input(
                        "zero-length back-reference cannot be framed",
                    ));
                }

                let distance = (distance as u16).to_be_bytes();
                let mut left = length;
                while left > 0 {
                    let piece = left.min(CONTAINER_MAX_LENGTH);
                    out.push(MARKER_BACKREF);
                    out.extend_from_slice(&distance);
                    out.push(piece as u8);
                    left -= piece;
                }
            }
        }
    }

    Ok(out)
}

/// Parse marker records back into tokens.
///
/// Fails with `CorruptArchive` on an unknown marker, a truncated record, or
/// a back-reference with zero distance or length.
pub fn bytes_to_tokens(bytes: &[u8]) -> Result<Vec<Lz77Token>> {
    let mut tokens = Vec::with_capacity(bytes.len() / 2);
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            MARKER_LITERAL => {
                let Some(&byte) = bytes.get(i + 1) else {
                    return Err(truncated(i, "literal"));
                };
                tokens.push(Lz77Token::Literal(byte));
                i += 2;
            }
            MARKER_BACKREF => {
                let Some(record) = bytes.get(i + 1..i + 4) else {
                    return Err(truncated(i, "back-reference"));
                };
                let distance = u16::from_be_bytes([record[0], record[1]]);
                let length = record[2];
                if distance == 0 || length == 0 {
                    return Err(OxiPackError::corrupt_archive(format!(
                        "back-reference at offset {} has distance {} and length {}",
                        i, distance, length
                    )));
                }
                tokens.push(Lz77Token::BackRef {
                    distance: u32::from(distance),
                    length: u32::from(length),
                });
                i += 4;
            }
            marker => {
                return Err(OxiPackError::corrupt_archive(format!(
                    "unknown token marker {:#04x} at offset {}",
                    marker, i
                )));
            }
        }
    }

    Ok(tokens)
}

fn truncated(offset: usize, what: &str) -> OxiPackError {
    OxiPackError::corrupt_archive(format!("truncated {} record at offset {}", what, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::ErrorKind;

    #[test]
    fn test_layout() {
        let tokens = [
            Lz77Token::Literal(b'A'),
            Lz77Token::BackRef {
                distance: 0x1234,
                length: 7,
            },
        ];
        let bytes = tokens_to_bytes(&tokens).unwrap();
        assert_eq!(bytes, vec![1, b'A', 0, 0x12, 0x34, 7]);
        assert_eq!(bytes_to_tokens(&bytes).unwrap(), tokens);
    }

    #[test]
    fn test_boundary_values() {
        let tokens = [
            Lz77Token::Literal(0),
            Lz77Token::BackRef {
                distance: 65535,
                length: 255,
            },
        ];
        let bytes = tokens_to_bytes(&tokens).unwrap();
        assert_eq!(bytes, vec![1, 0, 0, 0xFF, 0xFF, 0xFF]);
        assert_eq!(bytes_to_tokens(&bytes).unwrap(), tokens);
    }

    #[test]
    fn test_long_backref_split() {
        let tokens = [Lz77Token::BackRef {
            distance: 3,
            length: 600,
        }];
        let parsed = bytes_to_tokens(&tokens_to_bytes(&tokens).unwrap()).unwrap();
        let lengths: Vec<u32> = parsed
            .iter()
            .map(|t| match *t {
                Lz77Token::BackRef { distance, length } => {
                    assert_eq!(distance, 3);
                    length
                }
                Lz77Token::Literal(_) => panic!("unexpected literal"),
            })
            .collect();
        assert_eq!(lengths, vec![255, 255, 90]);
    }

    #[test]
    fn test_unframeable_tokens() {
        let far = [Lz77Token::BackRef {
            distance: 65536,
            length: 3,
        }];
        assert_eq!(tokens_to_bytes(&far).unwrap_err().kind(), ErrorKind::InvalidInput);

        let empty = [Lz77Token::BackRef {
            distance: 1,
            length: 0,
        }];
        assert_eq!(tokens_to_bytes(&empty).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_errors() {
        for bytes in [
            &[2u8][..],
            &[1][..],
            &[0, 0, 1][..],
            &[0, 0, 0, 5][..],
            &[0, 0, 5, 0][..],
            &[1, b'a', 7, 0][..],
        ] {
            let err = bytes_to_tokens(bytes).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CorruptArchive, "{:?}", bytes);
        }
    }
}
