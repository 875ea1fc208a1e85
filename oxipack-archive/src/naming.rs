//! Output file naming.
//!
//! ```text
//! Huffman: notes.txt -> notes.huff                  -> notes_decompressed.txt
//! others:  notes.txt -> notes_lzw_compressed.bin    -> notes_lzw_decompressed
//! ```
//!
//! Only the Huffman artifact remembers the original name, so only it can
//! restore the extension.

use crate::algorithm::Algorithm;
use std::path::Path;

/// File stem as a string, lossily converted.
fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Stem suffix marking a compressed non-Huffman artifact.
fn compressed_suffix(algorithm: Algorithm) -> String {
    format!("_{}_compressed", algorithm.name())
}

/// File name of the artifact produced from `input`.
pub fn compressed_name(input: &Path, algorithm: Algorithm) -> String {
    let stem = stem_of(input);
    match algorithm {
        Algorithm::Huffman => format!("{}.{}", stem, algorithm.extension()),
        _ => format!(
            "{}{}.{}",
            stem,
            compressed_suffix(algorithm),
            algorithm.extension()
        ),
    }
}

/// Stem of the original file, recovered from a non-Huffman artifact name.
///
/// `None` if the artifact does not follow the naming convention.
pub fn original_stem(artifact: &Path, algorithm: Algorithm) -> Option<String> {
    stem_of(artifact)
        .strip_suffix(&compressed_suffix(algorithm))
        .map(str::to_owned)
}

/// File name of the output restored from `artifact`.
///
/// `stored_name` is the original file name recorded in a Huffman artifact;
/// its extension is carried over. It is ignored for other algorithms.
pub fn decompressed_name(
    artifact: &Path,
    algorithm: Algorithm,
    stored_name: Option<&str>,
) -> String {
    match algorithm {
        Algorithm::Huffman => {
            let stem = stem_of(artifact);
            match stored_name
                .and_then(|name| Path::new(name).extension())
                .map(|ext| ext.to_string_lossy())
            {
                Some(ext) => format!("{}_decompressed.{}", stem, ext),
                None => format!("{}_decompressed", stem),
            }
        }
        _ => {
            let base = original_stem(artifact, algorithm).unwrap_or_else(|| stem_of(artifact));
            format!("{}_{}_decompressed", base, algorithm.name())
        }
    }
}
