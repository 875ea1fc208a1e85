//! Container framing.
//!
//! ```text
//! [blob length u32 BE]
//! [blob: payload bit count u64 BE][code table, schema v1]
//! [payload: Huffman bits, MSB-first, zero padded]
//! ```
//!
//! The header covers the whole blob, so the bit count travels with the
//! table and the payload is everything after it.

use oxipack_core::bitstream::bytes_for_bits;
use oxipack_core::cursor::ByteReader;
use oxipack_core::error::{OxiPackError, Result};
use oxipack_huffman::{CodeTable, HuffmanEncoded};

/// Size of the blob length header.
pub const HEADER_SIZE: usize = 4;

/// Size of the bit count at the start of the blob.
pub const BIT_COUNT_SIZE: usize = 8;

/// Frame one Huffman encode.
pub fn write_container(encoded: &HuffmanEncoded) -> Result<Vec<u8>> {
    let blob_len = BIT_COUNT_SIZE + encoded.table.serialized_len();
    let header = u32::try_from(blob_len).map_err(|_| {
        OxiPackError::invalid_input(format!("table blob of {} bytes is too large", blob_len))
    })?;

    let mut out = Vec::with_capacity(HEADER_SIZE + blob_len + encoded.payload.len());
    out.extend_from_slice(&header.to_be_bytes());
    out.extend_from_slice(&encoded.bit_count.to_be_bytes());
    out.extend_from_slice(&encoded.table.to_bytes());
    out.extend_from_slice(&encoded.payload);
    Ok(out)
}

/// Parse a container back into its Huffman parts.
///
/// Fails with `CorruptArchive` on a short header, a declared length beyond
/// the input, a blob that is not consumed exactly, or a payload whose
/// length disagrees with the bit count.
pub fn read_container(data: &[u8]) -> Result<HuffmanEncoded> {
    let mut reader = ByteReader::new(data);
    let blob_len = reader.read_u32()? as usize;

    if blob_len > reader.remaining() {
        return Err(OxiPackError::corrupt_archive(format!(
            "header declares a {}-byte table but only {} bytes follow",
            blob_len,
            reader.remaining()
        )));
    }

    let mut blob = ByteReader::new(reader.read_bytes(blob_len)?);
    let bit_count = blob.read_u64()?;
    let table = CodeTable::read_from(&mut blob)?;
    blob.expect_end()?;

    let payload = reader.read_rest();
    if payload.len() as u64 != bytes_for_bits(bit_count) {
        return Err(OxiPackError::corrupt_archive(format!(
            "payload is {} bytes but {} bits need {}",
            payload.len(),
            bit_count,
            bytes_for_bits(bit_count)
        )));
    }

    Ok(HuffmanEncoded {
        payload: payload.to_vec(),
        bit_count,
        table,
    })
}

/// Read only the declared blob length.
pub fn declared_blob_len(data: &[u8]) -> Result<u32> {
    ByteReader::new(data).read_u32()
}
