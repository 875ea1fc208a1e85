//! Token replay.

use crate::token::Lz77Token;
use oxipack_core::error::{OxiPackError, Result};

/// Replay `tokens` into a single growing output buffer.
///
/// Back-references are copied one byte at a time, so a `length` greater than
/// `distance` repeats the bytes it is producing. Fails with `CorruptData` if
/// a distance is zero or reaches before the start of the output.
pub fn decompress(tokens: &[Lz77Token]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(tokens.len() * 2);

    for token in tokens {
        match *token {
            Lz77Token::Literal(byte) => output.push(byte),
            Lz77Token::BackRef { distance, length } => {
                let distance = distance as usize;
                if distance == 0 || distance > output.len() {
                    return Err(OxiPackError::corrupt_data(distance, output.len()));
                }

                let start = output.len() - distance;
                output.reserve(length as usize);
                for k in 0..length as usize {
                    let byte = output[start + k];
                    output.push(byte);
                }
            }
        }
    }

    Ok(output)
}
