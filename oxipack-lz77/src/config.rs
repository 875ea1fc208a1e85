//! Matcher configuration.

/// Largest distance the deflate-style container can frame (16 bits).
pub const CONTAINER_MAX_DISTANCE: u32 = 65535;

/// Largest length a single container record can hold (8 bits).
pub const CONTAINER_MAX_LENGTH: u32 = 255;

/// Parameters of the hashed greedy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// How far behind the cursor a match may start.
    pub window_size: u32,
    /// Longest match considered at one position.
    pub lookahead: u32,
    /// Maximum number of same-prefix candidates examined per position.
    pub max_chain: usize,
}

impl Lz77Config {
    /// Default parameters: 4 KiB window, 15-byte lookahead.
    pub const DEFAULT: Self = Self {
        window_size: 4096,
        lookahead: 15,
        max_chain: 4096,
    };

    /// Widest parameters the deflate-style container can frame.
    pub const WIDE: Self = Self {
        window_size: CONTAINER_MAX_DISTANCE,
        lookahead: CONTAINER_MAX_LENGTH,
        max_chain: 4096,
    };

    /// Create a configuration with the default chain limit.
    pub fn new(window_size: u32, lookahead: u32) -> Self {
        Self {
            window_size,
            lookahead,
            max_chain: Self::DEFAULT.max_chain,
        }
    }

    /// Set the chain limit.
    pub fn with_max_chain(mut self, max_chain: usize) -> Self {
        self.max_chain = max_chain;
        self
    }

    /// Clamp window and lookahead to what the container can frame.
    pub fn clamped_for_container(self) -> Self {
        Self {
            window_size: self.window_size.min(CONTAINER_MAX_DISTANCE),
            lookahead: self.lookahead.min(CONTAINER_MAX_LENGTH),
            max_chain: self.max_chain,
        }
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Lz77Config::default(), Lz77Config::DEFAULT);
        assert_eq!(Lz77Config::DEFAULT.window_size, 4096);
        assert_eq!(Lz77Config::DEFAULT.lookahead, 15);
        assert_eq!(Lz77Config::WIDE.clamped_for_container(), Lz77Config::WIDE);
    }

    #[test]
    fn test_clamp() {
        let config = Lz77Config::new(1 << 20, 1000).with_max_chain(8);
        let clamped = config.clamped_for_container();
        assert_eq!(clamped.window_size, 65535);
        assert_eq!(clamped.lookahead, 255);
        assert_eq!(clamped.max_chain, 8);

        let small = Lz77Config::new(100, 10);
        assert_eq!(small.clamped_for_container(), small);
    }
}
