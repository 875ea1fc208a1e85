//! File-level compression and decompression.
//!
//! Outputs are written next to the input unless an output directory is
//! given. Existing files with the same name are overwritten.

use crate::algorithm::Algorithm;
use crate::artifact::{compress_bytes, decompress_bytes};
use crate::huff::HuffmanRecord;
use crate::naming::{compressed_name, decompressed_name, original_stem};
use crate::options::Options;
use oxipack_core::error::Result;
use oxipack_huffman::HuffmanCodec;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory outputs for `input` go to, creating `out_dir` if needed.
fn output_dir(input: &Path, out_dir: Option<&Path>) -> Result<PathBuf> {
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            Ok(dir.to_path_buf())
        }
        None => Ok(input.parent().map(Path::to_path_buf).unwrap_or_default()),
    }
}

/// Compress the file at `path` and write the artifact.
///
/// Huffman artifacts record the input's file name unless `options` sets
/// one. Returns the path written.
pub fn compress_file(
    path: &Path,
    algorithm: Algorithm,
    options: &Options,
    out_dir: Option<&Path>,
) -> Result<PathBuf> {
    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), %algorithm, "read input");

    let artifact = if algorithm.stores_file_name() && options.file_name.is_none() {
        let mut options = options.clone();
        options.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        compress_bytes(&data, algorithm, &options)?
    } else {
        compress_bytes(&data, algorithm, options)?
    };
    trace!(input = data.len(), artifact = artifact.len(), "compressed");

    let output = output_dir(path, out_dir)?.join(compressed_name(path, algorithm));
    fs::write(&output, &artifact)?;
    debug!(path = %output.display(), bytes = artifact.len(), "wrote artifact");

    Ok(output)
}

/// Decompress the artifact at `path` and write the recovered bytes.
///
/// Returns the path written.
pub fn decompress_file(
    path: &Path,
    algorithm: Algorithm,
    out_dir: Option<&Path>,
) -> Result<PathBuf> {
    let artifact = fs::read(path)?;
    debug!(path = %path.display(), bytes = artifact.len(), %algorithm, "read artifact");

    let (data, name) = match algorithm {
        Algorithm::Huffman => {
            let record = HuffmanRecord::from_bytes(&artifact)?;
            trace!(file_name = %record.file_name, "stored name");
            let encoded = &record.encoded;
            let data =
                HuffmanCodec::new().decode(&encoded.payload, encoded.bit_count, &encoded.table)?;
            (data, decompressed_name(path, algorithm, Some(&record.file_name)))
        }
        _ => (
            decompress_bytes(&artifact, algorithm)?,
            decompressed_name(path, algorithm, None),
        ),
    };
    trace!(artifact = artifact.len(), output = data.len(), "decompressed");

    let output = output_dir(path, out_dir)?.join(name);
    fs::write(&output, &data)?;
    debug!(path = %output.display(), bytes = data.len(), "wrote output");

    Ok(output)
}

/// Guess the original file an artifact was produced from.
///
/// Huffman artifacts name it directly. For the other algorithms the
/// directory is searched for a file whose stem matches the artifact name
/// with its `_<algorithm>_compressed` suffix removed, skipping `.huff`
/// artifacts. Returns `None` when nothing matches, or when several files
/// share the stem and the original cannot be told apart.
///
/// The result is a hint for verification, not a record of the input.
pub fn original_candidate(path: &Path, algorithm: Algorithm) -> Result<Option<PathBuf>> {
    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let candidate = match algorithm {
        Algorithm::Huffman => {
            let record = HuffmanRecord::from_bytes(&fs::read(path)?)?;
            if record.file_name.is_empty() {
                None
            } else {
                Some(dir.join(&record.file_name)).filter(|c| c.is_file() && c.as_path() != path)
            }
        }
        _ => match original_stem(path, algorithm) {
            Some(stem) => {
                let listing = if dir.as_os_str().is_empty() {
                    fs::read_dir(".")?
                } else {
                    fs::read_dir(&dir)?
                };
                let mut matches = Vec::new();
                for entry in listing {
                    let entry_path = entry?.path();
                    let same_stem = entry_path
                        .file_stem()
                        .is_some_and(|s| s.to_string_lossy() == stem);
                    // A sibling Huffman artifact shares the stem
                    let is_huff = entry_path
                        .extension()
                        .is_some_and(|e| e == Algorithm::Huffman.extension());
                    if same_stem && !is_huff && entry_path.is_file() {
                        matches.push(entry_path);
                    }
                }
                if matches.len() > 1 {
                    matches.sort();
                    debug!(artifact = %path.display(), ?matches, "ambiguous original");
                    None
                } else {
                    matches.pop().map(|m| match m.file_name() {
                        Some(name) => dir.join(name),
                        None => m,
                    })
                }
            }
            None => None,
        },
    };

    debug!(artifact = %path.display(), candidate = ?candidate, "original candidate");
    Ok(candidate)
}
