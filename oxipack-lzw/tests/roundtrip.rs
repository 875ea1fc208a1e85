//! Round-trip and dictionary tests for LZW.

use oxipack_core::ErrorKind;
use oxipack_lzw::{EncodeDictionary, FIRST_CODE, decode, encode, pack_codes, unpack_codes};

fn random_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Reference count of dictionary insertions for an input.
fn learned_entries(data: &[u8]) -> u32 {
    let mut dict = EncodeDictionary::new();
    let mut prefix = u32::from(data[0]);
    for &byte in &data[1..] {
        match dict.find(prefix, byte) {
            Some(code) => prefix = code,
            None => {
                dict.insert(prefix, byte);
                prefix = u32::from(byte);
            }
        }
    }
    dict.next_code() - FIRST_CODE
}

#[test]
fn test_kwkwk_abababa() {
    let codes = encode(b"ABABABA").unwrap();
    // Final code is the entry defined by the step that emitted it
    assert_eq!(*codes.last().unwrap(), 258);
    assert_eq!(decode(&codes).unwrap(), b"ABABABA");
}

#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0..=255).collect();
    let codes = encode(&input).unwrap();
    // Only the initial entries are ever emitted
    assert_eq!(codes, (0..=255).collect::<Vec<u32>>());
    // Yet one entry is learned per step
    assert_eq!(learned_entries(&input), 255);
    assert_eq!(decode(&codes).unwrap(), input);
}

#[test]
fn test_single_byte_run() {
    let input = b"aaaaaaaaaa";
    let codes = encode(input).unwrap();
    // a, aa, aaa, aaaa
    assert_eq!(codes, vec![97, 256, 257, 258]);
    assert_eq!(decode(&codes).unwrap(), input);
}

#[test]
fn test_random_bytes() {
    let input = random_bytes(50_000);
    let codes = encode(&input).unwrap();
    assert_eq!(decode(&codes).unwrap(), input);

    let packed = pack_codes(&codes).unwrap();
    assert_eq!(decode(&unpack_codes(&packed).unwrap()).unwrap(), input);
}

#[test]
fn test_codes_strictly_increasing() {
    let input = b"This is a test of compression! ".repeat(40);

    // Insertions hand out consecutive codes
    let mut dict = EncodeDictionary::new();
    let mut previous = None;
    let mut prefix = u32::from(input[0]);
    for &byte in &input[1..] {
        match dict.find(prefix, byte) {
            Some(code) => prefix = code,
            None => {
                let code = dict.insert(prefix, byte);
                if let Some(previous) = previous {
                    assert_eq!(code, previous + 1);
                }
                previous = Some(code);
                prefix = u32::from(byte);
            }
        }
    }

    // No emitted code is newer than the dictionary at that point
    let codes = encode(&input).unwrap();
    for (index, &code) in codes.iter().enumerate() {
        assert!(code <= 255 + index as u32);
    }
    assert_eq!(decode(&codes).unwrap(), input);
}

#[test]
fn test_packed_text_is_smaller() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(200);
    let packed = pack_codes(&encode(&input).unwrap()).unwrap();
    assert!(packed.len() < input.len() / 4);
}

#[test]
fn test_empty_is_invalid() {
    assert_eq!(encode(b"").unwrap_err().kind(), ErrorKind::InvalidInput);
    assert_eq!(decode(&[]).unwrap_err().kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_deterministic() {
    let input = random_bytes(4096);
    assert_eq!(encode(&input).unwrap(), encode(&input).unwrap());
}
