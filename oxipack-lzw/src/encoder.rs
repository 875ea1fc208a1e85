//! LZW encoder.

use crate::dictionary::EncodeDictionary;
use oxipack_core::error::{OxiPackError, Result};

/// Greedy longest-prefix LZW encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwEncoder;

impl LzwEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode `data` into dictionary codes.
    ///
    /// Fails with `InvalidInput` on empty data.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u32>> {
        let Some((&first, rest)) = data.split_first() else {
            return Err(OxiPackError::invalid_input("cannot LZW-encode empty data"));
        };

        let mut dict = EncodeDictionary::new();
        let mut codes = Vec::with_capacity(data.len() / 2 + 1);
        let mut prefix = u32::from(first);

        for &byte in rest {
            match dict.find(prefix, byte) {
                Some(code) => prefix = code,
                None => {
                    codes.push(prefix);
                    dict.insert(prefix, byte);
                    prefix = u32::from(byte);
                }
            }
        }

        codes.push(prefix);
        Ok(codes)
    }
}
