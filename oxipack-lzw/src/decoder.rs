//! LZW decoder.

use crate::dictionary::{DecodeDictionary, INITIAL_ENTRIES};
use oxipack_core::error::{OxiPackError, Result};

/// LZW decoder rebuilding the encoder's dictionary in lock-step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwDecoder;

impl LzwDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode dictionary codes back into bytes.
    ///
    /// Fails with `InvalidInput` on an empty code list, and with
    /// `CorruptArchive` if the first code is not a single byte or a later
    /// code is beyond the one about to be defined.
    pub fn decode(&self, codes: &[u32]) -> Result<Vec<u8>> {
        let Some((&first, rest)) = codes.split_first() else {
            return Err(OxiPackError::invalid_input("cannot LZW-decode an empty code list"));
        };

        if first >= INITIAL_ENTRIES {
            return Err(OxiPackError::corrupt_archive(format!(
                "first LZW code {} is not a single byte",
                first
            )));
        }

        let mut dict = DecodeDictionary::new();
        let mut output = Vec::with_capacity(codes.len() * 2);
        output.push(first as u8);
        let mut old = first;

        for &new in rest {
            let next_code = dict.next_code();
            let previous = dict.get(old).unwrap_or_default();

            let sequence = if let Some(known) = dict.get(new) {
                known.to_vec()
            } else if new == next_code {
                // KwKwK: the code being defined by this very step
                let mut sequence = previous.to_vec();
                sequence.push(previous.first().copied().unwrap_or_default());
                sequence
            } else {
                return Err(OxiPackError::corrupt_archive(format!(
                    "LZW code {} is beyond next code {}",
                    new, next_code
                )));
            };

            let mut entry = Vec::with_capacity(previous.len() + 1);
            entry.extend_from_slice(previous);
            entry.push(sequence[0]);

            output.extend_from_slice(&sequence);
            dict.push(entry);
            old = new;
        }

        Ok(output)
    }
}
