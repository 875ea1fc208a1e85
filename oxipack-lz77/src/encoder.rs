//! Hashed greedy LZ77 matcher.
//!
//! # Algorithm
//!
//! Every consumed position is indexed by its leading two bytes: a head table
//! holds the newest position per prefix and a chain links each position to
//! the previous one with the same prefix. At the cursor, candidates are
//! walked newest-first until the window edge or the chain limit, and the
//! longest run wins (ties keep the nearest). A match of at least
//! [`MIN_MATCH`] bytes becomes a back-reference, anything shorter a literal.

use crate::config::Lz77Config;
use crate::token::Lz77Token;

/// Shortest match worth a back-reference.
pub const MIN_MATCH: usize = 3;

/// One head slot per two-byte prefix.
const HASH_SIZE: usize = 1 << 16;

/// Chain terminator.
const NIL: usize = usize::MAX;

/// Greedy LZ77 encoder over a two-byte prefix index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    /// Create an encoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit parameters.
    pub fn with_config(config: Lz77Config) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    #[inline(always)]
    fn prefix(data: &[u8], pos: usize) -> usize {
        ((data[pos] as usize) << 8) | data[pos + 1] as usize
    }

    /// Tokenize `data`. Empty input yields no tokens.
    pub fn compress(&self, data: &[u8]) -> Vec<Lz77Token> {
        let n = data.len();
        let mut tokens = Vec::with_capacity(n / 2);
        let mut head = vec![NIL; HASH_SIZE];
        let mut chain = vec![NIL; n];

        let mut i = 0;
        while i < n {
            // Matching needs at least three bytes left
            let (best_len, best_dist) = if i + 2 < n {
                self.find_match(data, i, &head, &chain)
            } else {
                (0, 0)
            };

            let advance = if best_len >= MIN_MATCH {
                tokens.push(Lz77Token::BackRef {
                    distance: best_dist as u32,
                    length: best_len as u32,
                });
                best_len
            } else {
                tokens.push(Lz77Token::Literal(data[i]));
                1
            };

            for pos in i..i + advance {
                if pos + 1 < n {
                    let key = Self::prefix(data, pos);
                    chain[pos] = head[key];
                    head[key] = pos;
                }
            }
            i += advance;
        }

        tokens
    }

    /// Longest match for position `pos` as `(length, distance)`.
    fn find_match(
        &self,
        data: &[u8],
        pos: usize,
        head: &[usize],
        chain: &[usize],
    ) -> (usize, usize) {
        let window = self.config.window_size as usize;
        let max_len = (self.config.lookahead as usize).min(data.len() - pos);

        let mut best_len = 0;
        let mut best_dist = 0;
        let mut candidate = head[Self::prefix(data, pos)];
        let mut examined = 0;

        while candidate != NIL && examined < self.config.max_chain {
            let dist = pos - candidate;
            if dist > window {
                break;
            }

            let mut len = 0;
            while len < max_len && data[candidate + len] == data[pos + len] {
                len += 1;
            }

            if len > best_len {
                best_len = len;
                best_dist = dist;
                if len == max_len {
                    break;
                }
            }

            candidate = chain[candidate];
            examined += 1;
        }

        (best_len, best_dist)
    }
}
