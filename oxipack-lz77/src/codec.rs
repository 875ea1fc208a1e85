//! LZ77 codec over either matcher.

use crate::config::Lz77Config;
use crate::decoder::decompress;
use crate::encoder::Lz77Encoder;
use crate::token::Lz77Token;
use crate::triple::TripleEncoder;
use oxipack_core::error::Result;
use oxipack_core::traits::Codec;
use std::fmt;
use std::str::FromStr;

/// Matching strategy used to produce tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lz77Matcher {
    /// Two-byte prefix index with greedy longest match.
    #[default]
    Hashed,
    /// Explicit trailing window searched by substring.
    Triple,
}

impl Lz77Matcher {
    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Lz77Matcher::Hashed => "hashed",
            Lz77Matcher::Triple => "triple",
        }
    }
}

impl fmt::Display for Lz77Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lz77Matcher {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hashed" | "hash" => Ok(Lz77Matcher::Hashed),
            "triple" => Ok(Lz77Matcher::Triple),
            other => Err(format!("unknown LZ77 matcher: {}", other)),
        }
    }
}

/// LZ77 codec producing the shared token list.
///
/// With [`Lz77Matcher::Triple`] the config's `window_size` sizes the
/// explicit window; `lookahead` and `max_chain` only affect the hashed
/// matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Codec {
    config: Lz77Config,
    matcher: Lz77Matcher,
}

impl Lz77Codec {
    /// Create a hashed codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with explicit parameters.
    pub fn with_config(config: Lz77Config, matcher: Lz77Matcher) -> Self {
        Self { config, matcher }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    /// Get the matcher.
    pub fn matcher(&self) -> Lz77Matcher {
        self.matcher
    }

    /// Tokenize `data`. Empty input yields no tokens.
    pub fn compress(&self, data: &[u8]) -> Vec<Lz77Token> {
        match self.matcher {
            Lz77Matcher::Hashed => Lz77Encoder::with_config(self.config).compress(data),
            Lz77Matcher::Triple => {
                TripleEncoder::with_window(self.config.window_size as usize).compress_tokens(data)
            }
        }
    }
}

impl Codec for Lz77Codec {
    type Encoded = Vec<Lz77Token>;

    fn name(&self) -> &'static str {
        "lz77"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<Lz77Token>> {
        Ok(self.compress(input))
    }

    fn decode(&self, encoded: &Vec<Lz77Token>) -> Result<Vec<u8>> {
        decompress(encoded)
    }
}
