//! Explicit-window triple matcher (LZSS-style).
//!
//! Each step searches a trailing window of already consumed bytes for the
//! longest prefix of the remaining input, then emits
//! `(distance, length, next)`: the match plus the byte that follows it.
//! `distance == 0 && length == 0` means the step is a bare literal.

use crate::token::Lz77Token;
use oxipack_core::error::{OxiPackError, Result};

/// One step of the triple matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Triple {
    /// Bytes behind the cursor where the match starts, 0 without a match.
    pub distance: u32,
    /// Match length, 0 without a match.
    pub length: u32,
    /// Byte following the match; `None` only when the match ends the input.
    pub next: Option<u8>,
}

impl Lz77Triple {
    /// Lower onto the shared token contract: the back-reference (if any)
    /// followed by the literal (if any).
    pub fn into_tokens(self) -> impl Iterator<Item = Lz77Token> {
        let backref = (self.length > 0).then_some(Lz77Token::BackRef {
            distance: self.distance,
            length: self.length,
        });
        backref
            .into_iter()
            .chain(self.next.map(Lz77Token::Literal))
    }
}

/// Triple matcher over an explicit trailing window.
#[derive(Debug, Clone, Copy)]
pub struct TripleEncoder {
    window_size: usize,
}

impl TripleEncoder {
    /// Default window length.
    pub const DEFAULT_WINDOW: usize = 100;

    /// Create a matcher with the default window.
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Create a matcher with a custom window length.
    pub fn with_window(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Window length.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Produce triples for `data`.
    pub fn compress(&self, data: &[u8]) -> Vec<Lz77Triple> {
        let mut triples = Vec::new();
        let mut i = 0;

        while i < data.len() {
            let window_start = i.saturating_sub(self.window_size);
            let window = &data[window_start..i];
            let rest = &data[i..];

            // Grow the match while some occurrence of it still exists
            let mut length = 0;
            let mut distance = 0;
            for len in 1..=rest.len().min(window.len()) {
                match rfind(window, &rest[..len]) {
                    Some(pos) => {
                        length = len;
                        distance = window.len() - pos;
                    }
                    None => break,
                }
            }

            let next = rest.get(length).copied();
            triples.push(Lz77Triple {
                distance: distance as u32,
                length: length as u32,
                next,
            });
            i += length + 1;
        }

        triples
    }

    /// Produce shared tokens for `data`.
    pub fn compress_tokens(&self, data: &[u8]) -> Vec<Lz77Token> {
        self.compress(data)
            .into_iter()
            .flat_map(Lz77Triple::into_tokens)
            .collect()
    }
}

impl Default for TripleEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Rightmost start of `needle` within `haystack`.
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Replay triples into the bytes they encode.
///
/// Fails with `CorruptData` if a match reaches before the start of the
/// output, and with `CorruptArchive` if a match has a distance but no
/// length (or the reverse).
pub fn decompress_triples(triples: &[Lz77Triple]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(triples.len() * 2);

    for triple in triples {
        match (triple.distance, triple.length) {
            (0, 0) => {}
            (0, _) | (_, 0) => {
                return Err(OxiPackError::corrupt_archive(format!(
                    "triple with distance {} and length {}",
                    triple.distance, triple.length
                )));
            }
            (distance, length) => {
                let distance = distance as usize;
                if distance > output.len() {
                    return Err(OxiPackError::corrupt_data(distance, output.len()));
                }
                let start = output.len() - distance;
                for k in 0..length as usize {
                    let byte = output[start + k];
                    output.push(byte);
                }
            }
        }

        if let Some(byte) = triple.next {
            output.push(byte);
        }
    }

    Ok(output)
}
