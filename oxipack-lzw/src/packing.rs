//! Variable-width code list packing.
//!
//! Layout: `[count u32 BE]` followed by the codes MSB-first, code `i`
//! (0-based) written with `max(8, bit_width(255 + i))` bits. That is the
//! width of the largest code that can exist when the `i`-th code is emitted,
//! so widths grow by one bit each time the dictionary doubles, the way
//! variable-width LZW streams do. The last byte is zero-padded.

use oxipack_core::bitstream::{BitReader, BitWriter, bytes_for_bits};
use oxipack_core::cursor::ByteReader;
use oxipack_core::error::{OxiPackError, Result};

/// Narrowest code width.
pub const MIN_CODE_WIDTH: u8 = 8;

/// Largest code that can appear at position `index`.
#[inline]
pub fn max_code_at(index: usize) -> u64 {
    255 + index as u64
}

/// Width in bits of the code at position `index`.
#[inline]
pub fn code_width(index: usize) -> u8 {
    let bits = (u64::BITS - max_code_at(index).leading_zeros()) as u8;
    bits.max(MIN_CODE_WIDTH)
}

/// Longest code list whose widths all fit in 32 bits.
const MAX_CODES: usize = (u32::MAX - 255) as usize;

/// Pack `codes` into bytes.
///
/// Fails with `InvalidInput` if a code is larger than any code that could
/// exist at its position.
pub fn pack_codes(codes: &[u32]) -> Result<Vec<u8>> {
    if codes.len() > MAX_CODES {
        return Err(OxiPackError::invalid_input(format!(
            "{} codes exceed the packable maximum",
            codes.len()
        )));
    }

    let payload_bits: u64 = (0..codes.len()).map(|i| u64::from(code_width(i))).sum();
    let mut writer = BitWriter::with_capacity(bytes_for_bits(payload_bits) as usize);

    for (index, &code) in codes.iter().enumerate() {
        if u64::from(code) > max_code_at(index) {
            return Err(OxiPackError::invalid_input(format!(
                "code {} at position {} exceeds {}",
                code,
                index,
                max_code_at(index)
            )));
        }
        writer.write_bits(code, code_width(index));
    }

    let (payload, _) = writer.finish();
    let mut out = Vec::with_capacity(4 + payload.len());
    out.extend_from_slice(&(codes.len() as u32).to_be_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Unpack a code list produced by [`pack_codes`].
///
/// Fails with `CorruptArchive` on truncation, trailing bytes, or non-zero
/// pad bits.
pub fn unpack_codes(data: &[u8]) -> Result<Vec<u32>> {
    let mut cursor = ByteReader::new(data);
    let count = cursor.read_u32()? as usize;
    let payload = cursor.read_rest();

    // Every code takes at least one byte
    if count > payload.len() {
        return Err(OxiPackError::corrupt_archive(format!(
            "{} codes declared in {} payload bytes",
            count,
            payload.len()
        )));
    }

    let mut reader = BitReader::whole(payload);
    let mut codes = Vec::with_capacity(count);
    for index in 0..count {
        codes.push(reader.read_bits(code_width(index))?);
    }

    let used = reader.bits_read();
    if payload.len() as u64 != bytes_for_bits(used) {
        return Err(OxiPackError::corrupt_archive(format!(
            "{} trailing bytes after {} codes",
            payload.len() as u64 - bytes_for_bits(used),
            count
        )));
    }

    let pad = reader.remaining() as u8;
    if reader.read_bits(pad)? != 0 {
        return Err(OxiPackError::corrupt_archive("non-zero padding after last code"));
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::ErrorKind;

    #[test]
    fn test_code_width() {
        assert_eq!(code_width(0), 8);
        assert_eq!(code_width(1), 9);
        assert_eq!(code_width(256), 9);
        assert_eq!(code_width(257), 10);
        assert_eq!(code_width(768), 10);
        assert_eq!(code_width(769), 11);
    }

    #[test]
    fn test_layout() {
        // 8 bits + 9 bits = 17 bits -> 3 payload bytes
        let packed = pack_codes(&[0xFF, 0x100]).unwrap();
        assert_eq!(packed, vec![0, 0, 0, 2, 0xFF, 0x80, 0x00]);
        assert_eq!(unpack_codes(&packed).unwrap(), vec![0xFF, 0x100]);
    }

    #[test]
    fn test_empty_list() {
        let packed = pack_codes(&[]).unwrap();
        assert_eq!(packed, vec![0, 0, 0, 0]);
        assert!(unpack_codes(&packed).unwrap().is_empty());
    }

    #[test]
    fn test_code_too_large() {
        let err = pack_codes(&[256]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_truncated() {
        let packed = pack_codes(&[65, 66, 256, 258]).unwrap();
        let err = unpack_codes(&packed[..packed.len() - 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);

        let err = unpack_codes(&packed[..3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_trailing_bytes() {
        let mut packed = pack_codes(&[65, 66]).unwrap();
        packed.push(0);
        let err = unpack_codes(&packed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_dirty_padding() {
        let mut packed = pack_codes(&[0xFF, 0x100]).unwrap();
        *packed.last_mut().unwrap() |= 0x01;
        let err = unpack_codes(&packed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }

    #[test]
    fn test_count_beyond_payload() {
        let err = unpack_codes(&[0xFF, 0xFF, 0xFF, 0xFF, 0x41]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptArchive);
    }
}
