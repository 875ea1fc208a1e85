//! Property-based tests for the composite pipeline.

use proptest::prelude::*;

use oxipack_deflate::{bytes_to_tokens, compress_with, decompress, tokens_to_bytes};
use oxipack_lz77::{Lz77Config, Lz77Token};

fn token_strategy() -> impl Strategy<Value = Lz77Token> {
    prop_oneof![
        any::<u8>().prop_map(Lz77Token::Literal),
        (1u32..=65535, 1u32..=255).prop_map(|(distance, length)| Lz77Token::BackRef {
            distance,
            length
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_roundtrip(input in prop::collection::vec(0u8..6, 1..3000)) {
        for config in [Lz77Config::DEFAULT, Lz77Config::WIDE] {
            let container = compress_with(&input, config).unwrap();
            prop_assert_eq!(decompress(&container).unwrap(), input.clone());
        }
    }

    #[test]
    fn prop_serializer_roundtrip(tokens in prop::collection::vec(token_strategy(), 0..200)) {
        let bytes = tokens_to_bytes(&tokens).unwrap();
        prop_assert_eq!(bytes_to_tokens(&bytes).unwrap(), tokens);
    }
}
