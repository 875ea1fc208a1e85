//! LZ77 tokens.

/// A token produced by LZ77 matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lz77Token {
    /// A literal byte.
    Literal(u8),
    /// Copy `length` bytes starting `distance` bytes behind the write cursor.
    ///
    /// `length` may exceed `distance`, in which case the copy reads bytes it
    /// has itself just written.
    BackRef {
        /// Bytes behind the current output cursor (at least 1).
        distance: u32,
        /// Number of bytes to copy.
        length: u32,
    },
}

impl Lz77Token {
    /// Number of output bytes this token produces.
    pub fn output_len(&self) -> usize {
        match *self {
            Lz77Token::Literal(_) => 1,
            Lz77Token::BackRef { length, .. } => length as usize,
        }
    }

    /// Check whether this is a back-reference.
    pub fn is_backref(&self) -> bool {
        matches!(self, Lz77Token::BackRef { .. })
    }
}
