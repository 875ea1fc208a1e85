//! Compress command implementation.

use crate::utils::{
    compression_ratio, create_progress_bar, display_name, for_each_file, format_ratio, millis,
};
use oxipack_archive::{Algorithm, Options, compress_file};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

struct Compressed {
    output: PathBuf,
    original: u64,
    compressed: u64,
    elapsed_ms: f64,
}

pub fn cmd_compress(
    files: &[PathBuf],
    algorithm: Algorithm,
    options: &Options,
    output: Option<&Path>,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Compressing {} file(s) with {}", files.len(), algorithm);

    let pb = create_progress_bar(files.len() as u64, progress && files.len() > 1);
    let results = for_each_file(files, &pb, |path| {
        let original = fs::metadata(path)?.len();
        let start = Instant::now();
        let written = compress_file(path, algorithm, options, output)?;
        let elapsed_ms = millis(start.elapsed());
        let compressed = fs::metadata(&written)?.len();
        Ok(Compressed {
            output: written,
            original,
            compressed,
            elapsed_ms,
        })
    });

    let mut failed = 0usize;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(c) => println!(
                "  {} -> {} ({} -> {} bytes, ratio {}, {:.3} ms)",
                display_name(path),
                c.output.display(),
                c.original,
                c.compressed,
                format_ratio(compression_ratio(c.original, c.compressed)),
                c.elapsed_ms
            ),
            Err(e) => {
                failed += 1;
                println!("  FAILED: {} - {}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed", failed, files.len()).into());
    }
    Ok(())
}
