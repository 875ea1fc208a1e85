//! Property-based tests for LZ77.

use proptest::prelude::*;

use oxipack_lz77::{Lz77Config, Lz77Encoder, Lz77Token, TripleEncoder, decompress};

/// Inputs over a tiny alphabet so matches are frequent.
fn repetitive_input() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..1500)
}

fn config_strategy() -> impl Strategy<Value = Lz77Config> {
    (1u32..300, 3u32..40, 1usize..64).prop_map(|(window, lookahead, chain)| {
        Lz77Config::new(window, lookahead).with_max_chain(chain)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_hashed_roundtrip(input in repetitive_input(), config in config_strategy()) {
        let tokens = Lz77Encoder::with_config(config).compress(&input);
        prop_assert_eq!(decompress(&tokens).unwrap(), input);
    }

    #[test]
    fn prop_hashed_respects_config(input in repetitive_input(), config in config_strategy()) {
        let mut produced = 0usize;
        for token in Lz77Encoder::with_config(config).compress(&input) {
            if let Lz77Token::BackRef { distance, length } = token {
                prop_assert!((1..=config.window_size).contains(&distance));
                prop_assert!(distance as usize <= produced);
                prop_assert!((3..=config.lookahead).contains(&length));
            }
            produced += token.output_len();
        }
        prop_assert_eq!(produced, input.len());
    }

    #[test]
    fn prop_triple_roundtrip(input in repetitive_input(), window in 1usize..200) {
        let tokens = TripleEncoder::with_window(window).compress_tokens(&input);
        prop_assert_eq!(decompress(&tokens).unwrap(), input);
    }

    #[test]
    fn prop_arbitrary_bytes(input in prop::collection::vec(any::<u8>(), 0..2048)) {
        let tokens = Lz77Encoder::new().compress(&input);
        prop_assert_eq!(decompress(&tokens).unwrap(), input);
    }
}
